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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- TOUR -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A tour is a complete solution to an ATSP instance: a hamiltonian cycle
/// through all the vertices of the graph, along with its total cost.
///
/// Every solver in this crate treats vertex `n-1` as the fixed start (and end)
/// point of the cycle. This convention loses no generality since the cost of a
/// cycle is invariant under rotation. The `order` field therefore only stores
/// the visiting order of the `n-1` *other* vertices: the full cycle is
/// `n-1 -> order[0] -> ... -> order[n-2] -> n-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// The total cost of the cycle (sum of the costs of its `n` edges).
    pub cost: isize,
    /// The visiting order of the `n-1` non-start vertices.
    pub order: Vec<usize>,
}

// ----------------------------------------------------------------------------
// --- ERROR ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups the kinds of failures a solver can report. All of
/// these are detected eagerly: validation failures are raised at solver entry
/// before any computation is attempted, and infeasibility is proved by the
/// search itself (never guessed).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The instance or a candidate permutation is malformed (non-square
    /// matrix, fewer than two vertices, negative cost, size mismatch,
    /// out-of-range or duplicate vertex index).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The instance counts more vertices than the subset bitmask used by the
    /// dynamic programming solver can represent.
    #[error("instance with {0} vertices exceeds the subset mask width")]
    TooLarge(usize),
    /// The instance admits no hamiltonian cycle under its forbidden-edge
    /// constraints.
    #[error("the instance admits no hamiltonian cycle")]
    Infeasible,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_error {
    use crate::Error;

    #[test]
    fn errors_render_a_human_readable_message() {
        assert_eq!(
            "invalid input: cost matrix must be square",
            format!("{}", Error::InvalidInput("cost matrix must be square"))
        );
        assert!(format!("{}", Error::TooLarge(1000)).contains("1000"));
        assert_eq!(
            "the instance admits no hamiltonian cycle",
            format!("{}", Error::Infeasible)
        );
    }
}
