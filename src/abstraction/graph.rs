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

//! This module defines the `Graph` trait: the read-only contract through
//! which every solver accesses an ATSP instance.

/// This trait abstracts away the representation of an ATSP instance. An
/// implementation exposes the number of vertices of the directed graph and a
/// dense edge-cost lookup for any ordered pair of vertices.
///
/// The solvers of this crate only ever *read* through this trait; they never
/// mutate the instance. By convention, vertex `vertex_count() - 1` is the
/// fixed start/end point of every tour.
pub trait Graph {
    /// Returns the number `n` of vertices in the instance (`n >= 2`).
    fn vertex_count(&self) -> usize;
    /// Returns the cost of travelling along the directed edge `from -> to`,
    /// or `None` when that edge is forbidden. Costs may be asymmetric:
    /// `edge_cost(i, j)` need not equal `edge_cost(j, i)`.
    ///
    /// The behavior for `from == to` is left unspecified by this contract:
    /// solvers never query the diagonal on purpose.
    fn edge_cost(&self, from: usize, to: usize) -> Option<isize>;
}
