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

//! This module provides the branch-and-bound solver built on Little's
//! algorithm: cost-matrix reduction for the lower bounds, highest-penalty
//! zero-cell branching, and a best-bound-first frontier pruned by a global
//! incumbent.

mod node;
mod reduced;

pub use node::*;

use crate::{tour_cost_unchecked, Error, Fringe, Graph, SimpleFringe, Solver, Tour};

/// The branch-and-bound solver explores a tree of partial-assignment nodes.
/// Expanding the designated branch cell `(i, j)` of a node produces two
/// children: one where the edge is *excluded* (the cell is forbidden) and
/// one where it is *included* (row `i` and column `j` are removed and the
/// edge which would close a premature sub-cycle is forbidden). Both children
/// re-run the reduction/bounding step; a child only joins the frontier when
/// its bound still undercuts the incumbent.
///
/// The incumbent is seeded with the identity-order tour so pruning starts
/// working immediately, and it only ever decreases. The search stops as soon
/// as the best remaining bound on the frontier can no longer beat it: at
/// that point the incumbent is the proven optimum.
pub struct BranchAndBound<'a, G: Graph> {
    graph: &'a G,
    fringe: SimpleFringe<LowerBoundFirst>,
    /// The best complete-tour cost found so far, used as pruning threshold.
    incumbent: isize,
    best: Option<Tour>,
    explored: usize,
}

impl<'a, G: Graph> BranchAndBound<'a, G> {
    /// Creates a branch-and-bound solver for the given instance.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            fringe: SimpleFringe::new(LowerBoundFirst),
            incumbent: isize::MAX,
            best: None,
            explored: 0,
        }
    }

    /// The number of nodes expanded by the last call to `solve`.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Walks the committed chains to find the endpoints of the chain that
    /// the newly included edge `(i, j)` extends: the head of the chain
    /// ending in `i` and the tail of the chain starting from `j`. The edge
    /// from that tail back to that head is the one which would close a
    /// premature sub-cycle.
    fn chain_ends(path: &[(usize, usize)], i: usize, j: usize) -> (usize, usize) {
        let mut head = i;
        while let Some(&(from, _)) = path.iter().find(|&&(_, to)| to == head) {
            head = from;
        }
        let mut tail = j;
        while let Some(&(_, to)) = path.iter().find(|&&(from, _)| from == tail) {
            tail = to;
        }
        (head, tail)
    }

    /// A node with `n - 2` committed edges has a fully determined
    /// hamiltonian path: the two rows and columns still alive in its matrix
    /// admit at most one pairing closing a single cycle through all the
    /// vertices. This method finds that pairing, prices the cycle against
    /// the *instance* costs (not the reduced ones), and lowers the incumbent
    /// when the completed tour improves on it.
    fn complete(&mut self, node: &BbNode) {
        let n = self.graph.vertex_count();
        let mut has_out = vec![false; n];
        let mut has_in = vec![false; n];
        for &(from, to) in &node.path {
            has_out[from] = true;
            has_in[to] = true;
        }
        let rows = (0..n).filter(|&v| !has_out[v]).collect::<Vec<_>>();
        let cols = (0..n).filter(|&v| !has_in[v]).collect::<Vec<_>>();

        let pairings = [
            [(rows[0], cols[0]), (rows[1], cols[1])],
            [(rows[0], cols[1]), (rows[1], cols[0])],
        ];
        for pairing in pairings {
            // honor every forbidden cell, the ones inherited from exclude
            // branches included
            if pairing.iter().any(|&(r, c)| node.matrix.get(r, c).is_none()) {
                continue;
            }
            if let Some(tour) = self.cycle_of(&node.path, &pairing) {
                if tour.cost < self.incumbent {
                    self.incumbent = tour.cost;
                    self.best = Some(tour);
                }
            }
        }
    }

    /// Assembles the committed edges and the two closing ones into a
    /// successor map, and prices the result iff it is one single cycle
    /// through all `n` vertices.
    fn cycle_of(&self, path: &[(usize, usize)], closing: &[(usize, usize); 2]) -> Option<Tour> {
        let n = self.graph.vertex_count();
        let mut successor = vec![usize::MAX; n];
        for &(from, to) in path.iter().chain(closing.iter()) {
            successor[from] = to;
        }

        let start = n - 1;
        let mut order = Vec::with_capacity(n - 1);
        let mut cost = 0_isize;
        let mut from = start;
        for _ in 0..n {
            let to = successor[from];
            cost = cost.saturating_add(self.graph.edge_cost(from, to)?);
            if to != start {
                order.push(to);
            }
            from = to;
        }
        // a premature sub-cycle would have brought us back before visiting
        // everything
        if from == start && order.len() == n - 1 {
            Some(Tour { cost, order })
        } else {
            None
        }
    }
}

impl<G: Graph> Solver for BranchAndBound<'_, G> {
    fn solve(&mut self) -> Result<Tour, Error> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }

        self.fringe.clear();
        self.explored = 0;

        // seed the incumbent with a quick heuristic tour: the identity order
        let identity = (0..n - 1).collect::<Vec<_>>();
        match tour_cost_unchecked(self.graph, &identity) {
            Some(cost) => {
                self.incumbent = cost;
                self.best = Some(Tour { cost, order: identity });
            }
            None => {
                self.incumbent = isize::MAX;
                self.best = None;
            }
        }

        let mut root = BbNode::root(self.graph);
        root.settle();
        self.fringe.push(root);

        while self.fringe.peek().map_or(false, |top| top.lower_bound < self.incumbent) {
            let node = self.fringe.pop().unwrap();
            self.explored += 1;

            let Some((i, j)) = node.branch else {
                // no zero cell left: this partial solution cannot be
                // completed into a tour
                continue;
            };

            // exclude child: forbid the branch edge and re-settle; its bound
            // grows by (at least) the branching penalty
            let mut exclude = node.clone();
            exclude.matrix.forbid(i, j);
            exclude.settle();
            if exclude.lower_bound < self.incumbent {
                self.fringe.push(exclude);
            }

            // include child: commit the branch edge, drop row i and column j
            // and forbid the edge closing the merged chain prematurely
            let mut include = node;
            let (head, tail) = Self::chain_ends(&include.path, i, j);
            include.matrix.strike(i, j);
            include.matrix.forbid(tail, head);
            include.path.push((i, j));
            include.edges_fixed += 1;
            include.settle();

            if include.edges_fixed == n - 2 {
                self.complete(&include);
            } else if include.lower_bound < self.incumbent {
                self.fringe.push(include);
            }
        }

        match self.best.take() {
            Some(tour) => Ok(tour),
            None => Err(Error::Infeasible),
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
