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

//! This module provides `AdjacencyMatrix`: the default, dense, validated
//! implementation of the `Graph` trait.

use crate::{Error, Graph};

/// A dense asymmetric cost matrix implementing the `Graph` accessor contract.
/// Cells hold `Some(cost)` for a usable directed edge and `None` for a
/// forbidden one. The diagonal is conventionally unused and always reported
/// as forbidden.
///
/// # Example
/// ```
/// # use atsp::*;
/// let graph = AdjacencyMatrix::from_costs(vec![
///     vec![0, 10, 15, 20],
///     vec![5, 0, 9, 10],
///     vec![6, 13, 0, 12],
///     vec![8, 8, 9, 0],
/// ]).unwrap();
///
/// assert_eq!(4, graph.vertex_count());
/// assert_eq!(Some(13), graph.edge_cost(2, 1));
/// assert_eq!(Some(9), graph.edge_cost(3, 2));
/// assert_eq!(None, graph.edge_cost(1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Option<isize>>,
}

impl AdjacencyMatrix {
    /// Creates a matrix from explicit cells, where `None` marks a forbidden
    /// edge. The matrix must be square with at least two rows, and every
    /// present cost must be non-negative; otherwise an `InvalidInput` error
    /// is returned. Diagonal cells are forced to `None` whatever their input
    /// value.
    pub fn new(rows: Vec<Vec<Option<isize>>>) -> Result<Self, Error> {
        let size = rows.len();
        if size < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(Error::InvalidInput("cost matrix must be square"));
        }
        if rows.iter().enumerate().any(|(i, row)| {
            row.iter().enumerate().any(|(j, c)| i != j && matches!(c, Some(c) if *c < 0))
        }) {
            return Err(Error::InvalidInput("edge costs must be non-negative"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, cell) in row.into_iter().enumerate() {
                cells.push(if i == j { None } else { cell });
            }
        }
        Ok(Self { size, cells })
    }

    /// Creates a matrix where every off-diagonal edge is usable. This is the
    /// constructor you want for the typical benchmark instance: a raw square
    /// matrix of costs whose diagonal entries are ignored.
    pub fn from_costs(rows: Vec<Vec<isize>>) -> Result<Self, Error> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }
}

impl Graph for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_cost(&self, from: usize, to: usize) -> Option<isize> {
        self.cells[from * self.size + to]
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_adjacency_matrix {
    use crate::{AdjacencyMatrix, Error, Graph};

    #[test]
    fn a_single_vertex_is_not_an_instance() {
        let result = AdjacencyMatrix::from_costs(vec![vec![0]]);
        assert_eq!(Err(Error::InvalidInput("an instance counts at least two vertices")), result.map(|_| ()));
    }

    #[test]
    fn a_non_square_matrix_is_rejected() {
        let result = AdjacencyMatrix::from_costs(vec![vec![0, 1], vec![1, 0], vec![2, 3]]);
        assert_eq!(Err(Error::InvalidInput("cost matrix must be square")), result.map(|_| ()));
    }

    #[test]
    fn a_negative_cost_is_rejected() {
        let result = AdjacencyMatrix::from_costs(vec![vec![0, -1], vec![1, 0]]);
        assert_eq!(Err(Error::InvalidInput("edge costs must be non-negative")), result.map(|_| ()));
    }

    #[test]
    fn the_diagonal_is_always_forbidden() {
        let graph = AdjacencyMatrix::from_costs(vec![vec![7, 1], vec![1, 7]]).unwrap();
        assert_eq!(None, graph.edge_cost(0, 0));
        assert_eq!(None, graph.edge_cost(1, 1));
    }

    #[test]
    fn costs_may_be_asymmetric() {
        let graph = AdjacencyMatrix::from_costs(vec![vec![0, 2], vec![5, 0]]).unwrap();
        assert_eq!(Some(2), graph.edge_cost(0, 1));
        assert_eq!(Some(5), graph.edge_cost(1, 0));
    }

    #[test]
    fn forbidden_cells_are_preserved() {
        let graph = AdjacencyMatrix::new(vec![
            vec![None, Some(1), None],
            vec![Some(1), None, Some(1)],
            vec![Some(1), Some(1), None],
        ])
        .unwrap();
        assert_eq!(None, graph.edge_cost(0, 2));
        assert_eq!(Some(1), graph.edge_cost(2, 0));
    }
}
