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

//! This module provides the Held-Karp dynamic programming solver: the
//! O(n^2 * 2^n) exact algorithm based on memoized recursion over
//! (endpoint, visited-subset) states.

use fxhash::FxHashMap;

use crate::{Error, Graph, Solver, Tour};

/// An `isize::MAX` partial cost marks a state that cannot be reached through
/// usable edges. The saturating bound arithmetic guarantees it never wraps.
const UNREACHABLE: isize = isize::MAX;

/// The Held-Karp solver computes the optimal tour cost through the
/// recurrence
///
/// ```text
/// opt({v}, v)  = cost(start, v)
/// opt(S, t)    = min { opt(S \ {t}, q) + cost(q, t) : q in S \ {t} }
/// answer       = min { opt(N, t) + cost(t, start)   : t in N }
/// ```
///
/// where subsets of the `n-1` non-start vertices are encoded as bitmasks
/// (bit `i` set means vertex `i` was visited). States are memoized on first
/// use in a hash table keyed by the exact (endpoint, subset) pair: a missing
/// key *is* the "uncomputed" sentinel, so a zero-cost entry can never be
/// confused with a cache miss, and unreachable subset/endpoint combinations
/// are simply never tabulated.
pub struct HeldKarp<'a, G: Graph> {
    graph: &'a G,
    /// Best known cost of the partial path ending at `end` having visited
    /// exactly the vertices of `subset` (plus the start), keyed by
    /// `(end, subset)`.
    memo: FxHashMap<(usize, usize), isize>,
    /// The predecessor realizing each memoized cost, used to reconstruct the
    /// argmin tour once the optimal cost is known.
    pred: FxHashMap<(usize, usize), usize>,
}

impl<'a, G: Graph> HeldKarp<'a, G> {
    /// Creates a Held-Karp solver for the given instance.
    pub fn new(graph: &'a G) -> Self {
        Self { graph, memo: FxHashMap::default(), pred: FxHashMap::default() }
    }

    /// Memoized evaluation of `opt(subset, end)`. The recursion depth is
    /// bounded by the number of set bits in `subset`, hence by `n - 1`.
    fn partial_cost(&mut self, subset: usize, end: usize) -> isize {
        if let Some(&cost) = self.memo.get(&(end, subset)) {
            return cost;
        }

        let rest = subset & !(1 << end);
        let mut best = UNREACHABLE;
        let mut best_pred = None;

        let k = self.graph.vertex_count() - 1;
        for q in 0..k {
            if rest & (1 << q) == 0 {
                continue;
            }
            let through = match self.graph.edge_cost(q, end) {
                Some(cost) => self.partial_cost(rest, q).saturating_add(cost),
                None => UNREACHABLE,
            };
            if through < best {
                best = through;
                best_pred = Some(q);
            }
        }

        self.memo.insert((end, subset), best);
        if let Some(q) = best_pred {
            self.pred.insert((end, subset), q);
        }
        best
    }

    /// Walks the predecessor table backwards from the optimal final endpoint
    /// to rebuild the visiting order of the non-start vertices.
    fn reconstruct(&self, full: usize, last: usize) -> Vec<usize> {
        let mut order = vec![last];
        let mut subset = full;
        let mut end = last;
        while subset.count_ones() > 1 {
            let q = self.pred[&(end, subset)];
            subset &= !(1 << end);
            end = q;
            order.push(q);
        }
        order.reverse();
        order
    }
}

impl<G: Graph> Solver for HeldKarp<'_, G> {
    fn solve(&mut self) -> Result<Tour, Error> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }
        // every non-start vertex must have its own bit in the subset mask
        if (n - 1) as u32 >= usize::BITS {
            return Err(Error::TooLarge(n));
        }

        // the table conceptually belongs to a single invocation
        self.memo.clear();
        self.pred.clear();

        let start = n - 1;
        let k = n - 1;
        for v in 0..k {
            let seed = self.graph.edge_cost(start, v).unwrap_or(UNREACHABLE);
            self.memo.insert((v, 1 << v), seed);
        }

        let full = (1_usize << k) - 1;
        let mut best = UNREACHABLE;
        let mut best_last = None;
        for t in 0..k {
            let closing = match self.graph.edge_cost(t, start) {
                Some(cost) => self.partial_cost(full, t).saturating_add(cost),
                None => UNREACHABLE,
            };
            if closing < best {
                best = closing;
                best_last = Some(t);
            }
        }

        match best_last {
            Some(last) if best < UNREACHABLE => Ok(Tour { cost: best, order: self.reconstruct(full, last) }),
            _ => Err(Error::Infeasible),
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_held_karp {
    use crate::*;

    fn worked_example() -> AdjacencyMatrix {
        AdjacencyMatrix::from_costs(vec![
            vec![0, 10, 15, 20],
            vec![5, 0, 9, 10],
            vec![6, 13, 0, 12],
            vec![8, 8, 9, 0],
        ])
        .unwrap()
    }

    #[test]
    fn it_finds_the_optimum_of_the_worked_example() {
        let graph = worked_example();
        let tour = HeldKarp::new(&graph).solve().unwrap();
        assert_eq!(35, tour.cost);
        assert_eq!(vec![2, 0, 1], tour.order);
    }

    #[test]
    fn a_two_vertex_instance_reduces_to_the_round_trip() {
        let graph = AdjacencyMatrix::from_costs(vec![vec![0, 4], vec![11, 0]]).unwrap();
        let tour = HeldKarp::new(&graph).solve().unwrap();
        assert_eq!(15, tour.cost);
        assert_eq!(vec![0], tour.order);
    }

    #[test]
    fn it_agrees_with_brute_force() {
        let graph = AdjacencyMatrix::from_costs(vec![
            vec![0, 3, 9, 4, 6],
            vec![7, 0, 2, 8, 5],
            vec![5, 6, 0, 1, 9],
            vec![2, 9, 3, 0, 7],
            vec![4, 1, 8, 6, 0],
        ])
        .unwrap();
        let exhaustive = BruteForce::new(&graph).solve().unwrap();
        let dp = HeldKarp::new(&graph).solve().unwrap();
        assert_eq!(exhaustive.cost, dp.cost);
    }

    #[test]
    fn each_reachable_state_is_tabulated_exactly_once() {
        // for a 5-vertex instance, the (endpoint, subset) state space counts
        // k * 2^(k-1) = 4 * 8 = 32 distinct reachable pairs; memoize-on-first-
        // use must fill each of them once and never recompute any
        let graph = AdjacencyMatrix::from_costs(vec![
            vec![0, 3, 9, 4, 6],
            vec![7, 0, 2, 8, 5],
            vec![5, 6, 0, 1, 9],
            vec![2, 9, 3, 0, 7],
            vec![4, 1, 8, 6, 0],
        ])
        .unwrap();
        let mut solver = HeldKarp::new(&graph);
        solver.solve().unwrap();
        assert_eq!(32, solver.memo.len());
    }

    #[test]
    fn an_unreachable_goal_is_infeasible() {
        // no edge enters vertex 0
        let graph = AdjacencyMatrix::new(vec![
            vec![None, Some(1), Some(1)],
            vec![None, None, Some(1)],
            vec![None, Some(1), None],
        ])
        .unwrap();
        assert_eq!(Err(Error::Infeasible), HeldKarp::new(&graph).solve());
    }
}
