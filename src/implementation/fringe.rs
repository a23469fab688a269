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

//! This module provides the implementation of a simple solver fringe
//! (priority queue).

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{Fringe, NodeRanking};

/// This is a thin wrapper to convert a `NodeRanking` into a `Compare` object
/// as is required to configure the order of a binary heap. It has no
/// behavior of its own: it simply delegates to the underlying ranking.
#[derive(Debug, Clone, Copy)]
pub struct CompareNodes<O: NodeRanking>(O);
impl<O: NodeRanking> CompareNodes<O> {
    /// Creates a new instance
    pub fn new(o: O) -> Self {
        Self(o)
    }
}
impl<O: NodeRanking> Compare<O::Node> for CompareNodes<O> {
    fn compare(&self, l: &O::Node, r: &O::Node) -> Ordering {
        self.0.compare(l, r)
    }
}

/// The simplest fringe implementation you can think of: it basically
/// consists of a binary heap that pushes and pops search nodes in the order
/// dictated by the given ranking.
///
/// # Note
/// This is the frontier used by the branch-and-bound solver. Each pushed
/// node is a value moved into the heap; nothing aliases it until it is
/// popped (or dropped along with the fringe).
pub struct SimpleFringe<O: NodeRanking> {
    heap: BinaryHeap<O::Node, CompareNodes<O>>,
}
impl<O: NodeRanking> SimpleFringe<O> {
    /// This creates a new simple fringe which uses a custom node ranking.
    pub fn new(o: O) -> Self {
        Self { heap: BinaryHeap::from_vec_cmp(vec![], CompareNodes::new(o)) }
    }
}
impl<O: NodeRanking> Fringe for SimpleFringe<O> {
    type Node = O::Node;

    fn push(&mut self, node: Self::Node) {
        self.heap.push(node)
    }

    fn pop(&mut self) -> Option<Self::Node> {
        self.heap.pop()
    }

    fn peek(&self) -> Option<&Self::Node> {
        self.heap.peek()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_simple_fringe {
    use std::cmp::Ordering;

    use crate::*;

    /// A dummy ranking for use in the tests: the smallest integer is the
    /// most promising node
    struct SmallestFirst;
    impl NodeRanking for SmallestFirst {
        type Node = isize;

        fn compare(&self, a: &isize, b: &isize) -> Ordering {
            b.cmp(a)
        }
    }

    #[test]
    fn by_default_it_is_empty() {
        let fringe = SimpleFringe::new(SmallestFirst);
        assert_eq!(fringe.len(), 0);
        assert!(fringe.is_empty());
    }

    #[test]
    fn when_i_push_a_node_onto_the_fringe_then_the_length_increases() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        fringe.push(10);
        fringe.push(20);
        assert_eq!(fringe.len(), 2);
        assert!(!fringe.is_empty());
    }

    #[test]
    fn when_i_pop_a_node_off_the_fringe_then_the_length_decreases() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        fringe.push(10);
        fringe.push(20);
        fringe.pop();
        assert_eq!(fringe.len(), 1);
        fringe.pop();
        assert_eq!(fringe.len(), 0);
    }

    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_fringe_i_get_none() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        assert_eq!(None, fringe.pop());
    }

    #[test]
    fn nodes_are_popped_in_ranking_order() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        fringe.push(4);
        fringe.push(1);
        fringe.push(3);
        fringe.push(2);

        assert_eq!(Some(1), fringe.pop());
        assert_eq!(Some(2), fringe.pop());
        assert_eq!(Some(3), fringe.pop());
        assert_eq!(Some(4), fringe.pop());
    }

    #[test]
    fn peek_does_not_remove_the_best_node() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        fringe.push(4);
        fringe.push(1);
        assert_eq!(Some(&1), fringe.peek());
        assert_eq!(2, fringe.len());
        assert_eq!(Some(1), fringe.pop());
    }

    #[test]
    fn when_i_clear_a_non_empty_fringe_it_becomes_empty() {
        let mut fringe = SimpleFringe::new(SmallestFirst);
        fringe.push(5);
        assert!(!fringe.is_empty());
        fringe.clear();
        assert!(fringe.is_empty());
    }
}
