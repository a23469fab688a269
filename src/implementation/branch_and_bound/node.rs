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

//! This module provides the branch-and-bound search node and the node
//! ranking which orders the frontier.

use std::cmp::Ordering;

use super::reduced::ReducedMatrix;
use crate::{Graph, NodeRanking};

/// A candidate partial solution of the branch-and-bound search. A node owns
/// its own cost-matrix copy: from the moment it is pushed onto the frontier
/// until it is either expanded into its two children or pruned, nothing else
/// aliases it.
///
/// Invariant: `lower_bound` never exceeds the true optimal cost of any tour
/// consistent with this node's fixed and forbidden edges, and a child's
/// bound is never below its parent's.
#[derive(Debug, Clone)]
pub struct BbNode {
    /// The cost matrix still under reduction.
    pub(crate) matrix: ReducedMatrix,
    /// Accumulated lower bound for any completion of this partial solution.
    pub lower_bound: isize,
    /// The number of edges already committed into the path.
    pub edges_fixed: usize,
    /// The zero cell with the highest branching penalty at the last
    /// reduction step, if any zero remains.
    pub(crate) branch: Option<(usize, usize)>,
    /// The penalty of the designated branch cell.
    pub(crate) penalty: isize,
    /// The edges committed so far; they form vertex-disjoint chains.
    pub(crate) path: Vec<(usize, usize)>,
}

impl BbNode {
    /// Builds the root node of a search: the full instance matrix with no
    /// committed edge and a zero bound. The caller still has to `settle` it.
    pub(crate) fn root<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            matrix: ReducedMatrix::from_graph(graph),
            lower_bound: 0,
            edges_fixed: 0,
            branch: None,
            penalty: 0,
            path: vec![],
        }
    }

    /// Runs the reduction/bounding step on this node: the matrix is reduced,
    /// the subtracted total is folded into the lower bound, and the highest
    /// penalty zero cell is designated as the next branching cell.
    pub(crate) fn settle(&mut self) {
        let reduction = self.matrix.reduce();
        self.lower_bound = self.lower_bound.saturating_add(reduction);
        match self.matrix.best_branch() {
            Some((cell, penalty)) => {
                self.branch = Some(cell);
                self.penalty = penalty;
            }
            None => {
                self.branch = None;
                self.penalty = 0;
            }
        }
    }
}

/// The frontier ordering of the branch-and-bound solver: the node with the
/// lowest lower bound is the most promising; on equal bounds the node with
/// more committed edges wins, because deeper, more determined partial
/// solutions expand faster toward a complete tour.
#[derive(Debug, Clone, Copy)]
pub struct LowerBoundFirst;
impl NodeRanking for LowerBoundFirst {
    type Node = BbNode;

    fn compare(&self, a: &BbNode, b: &BbNode) -> Ordering {
        b.lower_bound
            .cmp(&a.lower_bound)
            .then_with(|| a.edges_fixed.cmp(&b.edges_fixed))
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
