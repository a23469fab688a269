// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the reducible cost matrix at the heart of the
//! branch-and-bound bounding step (Little's row/column reduction rule).

use crate::Graph;

/// A square cost matrix under reduction. Forbidden cells (the diagonal,
/// edges excluded by branching, rows/columns consumed by committed edges)
/// carry a dedicated `None` marker instead of a numeric "infinite" sentinel,
/// so no sentinel value can ever take part in -- let alone overflow -- the
/// bound arithmetic.
///
/// Every branch-and-bound node owns its own copy of this matrix; copies are
/// never shared between nodes.
#[derive(Debug, Clone)]
pub(crate) struct ReducedMatrix {
    size: usize,
    cells: Vec<Option<isize>>,
}

impl ReducedMatrix {
    /// Builds the full matrix of an instance, with the diagonal forbidden.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let size = graph.vertex_count();
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(if i == j { None } else { graph.edge_cost(i, j) });
            }
        }
        Self { size, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> Option<isize> {
        self.cells[i * self.size + j]
    }

    fn set(&mut self, i: usize, j: usize, value: isize) {
        self.cells[i * self.size + j] = Some(value);
    }

    /// Marks the edge `(i, j)` forbidden.
    pub fn forbid(&mut self, i: usize, j: usize) {
        self.cells[i * self.size + j] = None;
    }

    /// Removes row `i` and column `j` from the matrix, which is how
    /// committing to the edge `(i, j)` is materialized: vertex `i`'s
    /// outgoing choice and vertex `j`'s incoming choice are now fixed.
    pub fn strike(&mut self, i: usize, j: usize) {
        for col in 0..self.size {
            self.forbid(i, col);
        }
        for row in 0..self.size {
            self.forbid(row, j);
        }
    }

    /// Runs one full reduction pass: subtracts each row's minimum usable
    /// value from that row, then does the same per column, and returns the
    /// total amount subtracted (the lower-bound increase). Rows and columns
    /// without any usable cell are skipped: they are fully eliminated.
    pub fn reduce(&mut self) -> isize {
        let mut total = 0_isize;
        for i in 0..self.size {
            let min = (0..self.size).filter_map(|j| self.get(i, j)).min();
            if let Some(min) = min {
                if min > 0 {
                    for j in 0..self.size {
                        if let Some(cell) = self.get(i, j) {
                            self.set(i, j, cell - min);
                        }
                    }
                    total = total.saturating_add(min);
                }
            }
        }
        for j in 0..self.size {
            let min = (0..self.size).filter_map(|i| self.get(i, j)).min();
            if let Some(min) = min {
                if min > 0 {
                    for i in 0..self.size {
                        if let Some(cell) = self.get(i, j) {
                            self.set(i, j, cell - min);
                        }
                    }
                    total = total.saturating_add(min);
                }
            }
        }
        total
    }

    /// After a reduction pass, every zero cell is a candidate branch edge.
    /// The penalty of a zero cell `(i, j)` is the bound increase incurred by
    /// *excluding* that edge: the minimum of row `i` without column `j` plus
    /// the minimum of column `j` without row `i` (a missing minimum
    /// saturates, meaning the edge is forced). This method returns the zero
    /// cell of highest penalty, which yields the tightest bound separation
    /// between the two children, or `None` when the matrix has no zero left.
    pub fn best_branch(&self) -> Option<((usize, usize), isize)> {
        let mut best: Option<((usize, usize), isize)> = None;
        for i in 0..self.size {
            for j in 0..self.size {
                if self.get(i, j) != Some(0) {
                    continue;
                }
                let row_min = (0..self.size)
                    .filter(|&col| col != j)
                    .filter_map(|col| self.get(i, col))
                    .min()
                    .unwrap_or(isize::MAX);
                let col_min = (0..self.size)
                    .filter(|&row| row != i)
                    .filter_map(|row| self.get(row, j))
                    .min()
                    .unwrap_or(isize::MAX);
                let penalty = row_min.saturating_add(col_min);
                if best.map_or(true, |(_, highest)| penalty > highest) {
                    best = Some(((i, j), penalty));
                }
            }
        }
        best
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_reduced_matrix {
    use super::ReducedMatrix;
    use crate::AdjacencyMatrix;

    fn worked_example() -> ReducedMatrix {
        let graph = AdjacencyMatrix::from_costs(vec![
            vec![0, 10, 15, 20],
            vec![5, 0, 9, 10],
            vec![6, 13, 0, 12],
            vec![8, 8, 9, 0],
        ])
        .unwrap();
        ReducedMatrix::from_graph(&graph)
    }

    #[test]
    fn the_diagonal_is_forbidden_from_the_start() {
        let matrix = worked_example();
        for v in 0..4 {
            assert_eq!(None, matrix.get(v, v));
        }
    }

    #[test]
    fn reduction_extracts_the_root_lower_bound() {
        // rows yield 10 + 5 + 6 + 8 = 29, columns a further 1 + 5 = 6
        let mut matrix = worked_example();
        assert_eq!(35, matrix.reduce());
    }

    #[test]
    fn a_reduced_matrix_has_a_zero_in_every_usable_row() {
        let mut matrix = worked_example();
        matrix.reduce();
        for i in 0..4 {
            assert!((0..4).any(|j| matrix.get(i, j) == Some(0)));
        }
    }

    #[test]
    fn reducing_twice_adds_nothing() {
        let mut matrix = worked_example();
        matrix.reduce();
        assert_eq!(0, matrix.reduce());
    }

    #[test]
    fn the_highest_penalty_zero_is_designated() {
        let mut matrix = worked_example();
        matrix.reduce();
        let ((i, j), penalty) = matrix.best_branch().unwrap();
        // every zero's penalty must be dominated by the designated one
        for r in 0..4 {
            for c in 0..4 {
                if matrix.get(r, c) != Some(0) || (r, c) == (i, j) {
                    continue;
                }
                let row_min = (0..4).filter(|&x| x != c).filter_map(|x| matrix.get(r, x)).min().unwrap();
                let col_min = (0..4).filter(|&x| x != r).filter_map(|x| matrix.get(x, c)).min().unwrap();
                assert!(row_min + col_min <= penalty);
            }
        }
    }

    #[test]
    fn striking_a_row_and_column_eliminates_them() {
        let mut matrix = worked_example();
        matrix.strike(1, 2);
        for v in 0..4 {
            assert_eq!(None, matrix.get(1, v));
            assert_eq!(None, matrix.get(v, 2));
        }
        // the rest of the matrix is untouched
        assert_eq!(Some(10), matrix.get(0, 1));
    }

    #[test]
    fn a_fully_eliminated_matrix_offers_no_branch() {
        let mut matrix = worked_example();
        matrix.strike(0, 0);
        matrix.strike(1, 1);
        matrix.strike(2, 2);
        matrix.strike(3, 3);
        assert_eq!(0, matrix.reduce());
        assert_eq!(None, matrix.best_branch());
    }
}
