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

//! This module provides the approximate solvers: nearest neighbour and
//! greedy edge selection. Both are simple local-decision procedures: they
//! return a feasible tour quickly, with no optimality guarantee beyond
//! never beating the exact optimum.

use crate::{Error, Graph, Solver, Tour};

/// The nearest-neighbour heuristic starts from the fixed start vertex and
/// repeatedly hops to the cheapest not-yet-visited vertex, closing the cycle
/// once everything was visited. Suboptimality is not an error; getting stuck
/// on forbidden edges before the cycle closes is reported as `Infeasible`
/// (the heuristic may give up on instances that an exact solver can still
/// complete).
pub struct NearestNeighbour<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> NearestNeighbour<'a, G> {
    /// Creates a nearest-neighbour solver for the given instance.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: Graph> Solver for NearestNeighbour<'_, G> {
    fn solve(&mut self) -> Result<Tour, Error> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }

        let start = n - 1;
        let mut visited = vec![false; n - 1];
        let mut order = Vec::with_capacity(n - 1);
        let mut cost = 0_isize;
        let mut from = start;

        for _ in 0..n - 1 {
            let nearest = (0..n - 1)
                .filter(|&v| !visited[v])
                .filter_map(|v| self.graph.edge_cost(from, v).map(|c| (c, v)))
                .min();
            let Some((hop, to)) = nearest else {
                return Err(Error::Infeasible);
            };
            visited[to] = true;
            order.push(to);
            cost = cost.saturating_add(hop);
            from = to;
        }

        match self.graph.edge_cost(from, start) {
            Some(closing) => Ok(Tour { cost: cost.saturating_add(closing), order }),
            None => Err(Error::Infeasible),
        }
    }
}

/// The greedy-edge heuristic sorts all usable edges by ascending cost and
/// accepts each one in turn unless it would give a vertex a second outgoing
/// or incoming edge, or close a cycle before all the vertices are covered.
/// The `n` accepted edges form the tour.
pub struct GreedyEdges<'a, G: Graph> {
    graph: &'a G,
}

impl<'a, G: Graph> GreedyEdges<'a, G> {
    /// Creates a greedy edge-selection solver for the given instance.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: Graph> Solver for GreedyEdges<'_, G> {
    fn solve(&mut self) -> Result<Tour, Error> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return Err(Error::InvalidInput("an instance counts at least two vertices"));
        }

        let mut edges = vec![];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if let Some(cost) = self.graph.edge_cost(i, j) {
                    edges.push((cost, i, j));
                }
            }
        }
        edges.sort_unstable();

        let mut successor = vec![usize::MAX; n];
        let mut predecessor = vec![usize::MAX; n];
        let mut accepted = 0;
        let mut cost = 0_isize;

        for &(edge_cost, i, j) in &edges {
            if accepted == n {
                break;
            }
            if successor[i] != usize::MAX || predecessor[j] != usize::MAX {
                continue;
            }
            // follow the chain out of j; reaching i means the edge would
            // close a cycle, which is only allowed for the very last edge
            let mut tail = j;
            while successor[tail] != usize::MAX {
                tail = successor[tail];
            }
            if tail == i && accepted != n - 1 {
                continue;
            }
            successor[i] = j;
            predecessor[j] = i;
            accepted += 1;
            cost = cost.saturating_add(edge_cost);
        }

        if accepted != n {
            return Err(Error::Infeasible);
        }

        let start = n - 1;
        let mut order = Vec::with_capacity(n - 1);
        let mut vertex = successor[start];
        while vertex != start {
            order.push(vertex);
            vertex = successor[vertex];
        }
        Ok(Tour { cost, order })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
