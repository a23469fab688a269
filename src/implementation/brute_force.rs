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

//! This module provides the exhaustive-search solver. It is the slowest of
//! the exact algorithms but also the simplest, which makes it the reference
//! oracle against which the other solvers are validated on small instances.

use crate::{tour_cost_unchecked, Error, Graph, HeapPermutations, Solver, Tour};

/// The brute-force solver scores every one of the `(n-1)!` permutations of
/// the non-start vertices and keeps the cheapest. Each permutation is derived
/// from the previous one by a single swap (Heap's algorithm), so the
/// enumeration itself costs O(1) per step and the O(n) work per candidate is
/// all in the scoring.
///
/// Only practical for tiny instances (about n = 11 and below), but within
/// that range it is a correctness oracle: it assumes nothing beyond covering
/// all permutations exactly once.
pub struct BruteForce<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> BruteForce<'a, G> {
    /// Creates a brute-force solver for the given instance.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: Graph> Solver for BruteForce<'_, G> {
    fn solve(&mut self) -> Result<Tour, Error> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }

        let mut best_cost = isize::MAX;
        let mut best_order = vec![];

        let mut perms = HeapPermutations::new(n - 1);
        while let Some(order) = perms.next() {
            if let Some(cost) = tour_cost_unchecked(self.graph, order) {
                if cost < best_cost {
                    best_cost = cost;
                    best_order = order.to_vec();
                }
            }
        }

        if best_order.is_empty() {
            Err(Error::Infeasible)
        } else {
            Ok(Tour { cost: best_cost, order: best_order })
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_brute_force {
    use crate::*;

    #[test]
    fn it_finds_the_optimum_of_the_worked_example() {
        let graph = AdjacencyMatrix::from_costs(vec![
            vec![0, 10, 15, 20],
            vec![5, 0, 9, 10],
            vec![6, 13, 0, 12],
            vec![8, 8, 9, 0],
        ])
        .unwrap();
        let tour = BruteForce::new(&graph).solve().unwrap();
        assert_eq!(35, tour.cost);
        // the cycle 3 -> 2 -> 0 -> 1 -> 3 realizes the optimum
        assert_eq!(vec![2, 0, 1], tour.order);
    }

    #[test]
    fn the_reported_order_rescores_to_the_reported_cost() {
        let graph = AdjacencyMatrix::from_costs(vec![
            vec![0, 3, 9, 4],
            vec![7, 0, 2, 8],
            vec![5, 6, 0, 1],
            vec![2, 9, 3, 0],
        ])
        .unwrap();
        let tour = BruteForce::new(&graph).solve().unwrap();
        assert_eq!(Ok(tour.cost), tour_cost(&graph, &tour.order));
    }

    #[test]
    fn a_two_vertex_instance_has_a_single_tour() {
        let graph = AdjacencyMatrix::from_costs(vec![vec![0, 4], vec![11, 0]]).unwrap();
        let tour = BruteForce::new(&graph).solve().unwrap();
        assert_eq!(15, tour.cost);
        assert_eq!(vec![0], tour.order);
    }

    #[test]
    fn it_reports_infeasibility_when_no_cycle_exists() {
        // vertex 0 cannot be left
        let graph = AdjacencyMatrix::new(vec![
            vec![None, None, None],
            vec![Some(1), None, Some(1)],
            vec![Some(1), Some(1), None],
        ])
        .unwrap();
        assert_eq!(Err(Error::Infeasible), BruteForce::new(&graph).solve());
    }
}
