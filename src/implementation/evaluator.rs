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

//! This module provides the target-function evaluator: the one piece of code
//! shared by all solvers to score a candidate tour.

use crate::{Error, Graph};

/// Computes the total cost of the cycle described by `order`: starting from
/// the fixed start vertex `n-1`, visiting every vertex of `order` in turn,
/// and closing the cycle back to the start. This function has no side effect
/// and is deterministic: scoring the same order twice yields the same cost.
///
/// # Errors
/// - `InvalidInput` when `order` is not a permutation of `0..n-1` (size
///   mismatch, out-of-range index or duplicate vertex);
/// - `Infeasible` when the described cycle runs through a forbidden edge.
pub fn tour_cost<G: Graph + ?Sized>(graph: &G, order: &[usize]) -> Result<isize, Error> {
    let n = graph.vertex_count();
    if n < 2 {
        return Err(Error::InvalidInput("an instance counts at least two vertices"));
    }
    if order.len() != n - 1 {
        return Err(Error::InvalidInput("order must visit exactly the n-1 non-start vertices"));
    }
    let mut seen = vec![false; n - 1];
    for &vertex in order {
        if vertex >= n - 1 {
            return Err(Error::InvalidInput("order contains an out-of-range vertex"));
        }
        if seen[vertex] {
            return Err(Error::InvalidInput("order visits a vertex twice"));
        }
        seen[vertex] = true;
    }
    tour_cost_unchecked(graph, order).ok_or(Error::Infeasible)
}

/// The validation-free scoring loop backing `tour_cost`. Callers must ensure
/// that `order` is a permutation of `0..n-1`. Returns `None` when the cycle
/// runs through a forbidden edge.
pub(crate) fn tour_cost_unchecked<G: Graph + ?Sized>(graph: &G, order: &[usize]) -> Option<isize> {
    let start = graph.vertex_count() - 1;
    let mut total = 0_isize;
    let mut from = start;
    for &to in order {
        total = total.saturating_add(graph.edge_cost(from, to)?);
        from = to;
    }
    total = total.saturating_add(graph.edge_cost(from, start)?);
    Some(total)
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
