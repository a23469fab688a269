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

//! This module defines the traits for the fringe (aka the solver frontier)
//! and for the ordering which decides how promising a search node is.

use std::cmp::Ordering;

/// This trait abstracts away the implementation details of the solver fringe.
/// That is, a `Fringe` represents the global priority queue which stores all
/// the branch-and-bound nodes remaining to explore.
///
/// A node pushed onto the fringe is a value snapshot: it is owned by the
/// fringe alone and is never aliased nor mutated until it is popped again.
pub trait Fringe {
    type Node;

    /// This is how you push a node onto the fringe.
    fn push(&mut self, node: Self::Node);
    /// This method yields the most promising node from the fringe.
    /// # Note:
    /// The solver relies on the assumption that a fringe will pop nodes in
    /// ascending lower-bound order. Hence, it is a requirement for any fringe
    /// implementation to enforce that requirement.
    fn pop(&mut self) -> Option<Self::Node>;
    /// This method gives a peek at the most promising node without removing
    /// it from the queue. The solver uses it to decide termination: when the
    /// best remaining bound cannot improve on the incumbent, the search stops.
    fn peek(&self) -> Option<&Self::Node>;
    /// This method clears the fringe: it removes all nodes from the queue.
    fn clear(&mut self);
    /// Yields the length of the queue.
    fn len(&self) -> usize;
    /// Returns true iff the fringe is empty (len == 0)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// This trait encapsulates a total ordering between search nodes. It is used
/// to parameterize the order in which a fringe pops its nodes: the node
/// compared `Greater` is deemed the more promising of the two and is served
/// first.
pub trait NodeRanking {
    type Node;

    /// Compares two nodes; the `Greater` one is popped first.
    fn compare(&self, a: &Self::Node, b: &Self::Node) -> Ordering;
}
