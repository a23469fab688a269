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

//! This module defines the `Solver` trait.

use crate::{Error, Tour};

/// This is the solver abstraction. It is implemented both by the exact
/// algorithms (brute force, Held-Karp, branch-and-bound) and by the
/// approximate heuristics (nearest neighbour, greedy edge selection).
///
/// All the solvers are synchronous and single threaded: a call to `solve`
/// runs to completion and returns either the best tour found or an error.
/// The three exact solvers are independent alternative strategies over the
/// same problem; on any instance they return tours of identical (provably
/// optimal) cost. The heuristics only promise a feasible tour whose cost is
/// greater than or equal to the optimum.
pub trait Solver {
    /// Searches for a minimum cost hamiltonian cycle and returns it.
    ///
    /// # Errors
    /// - `InvalidInput` when the instance is malformed (detected before any
    ///   computation is attempted).
    /// - `TooLarge` when the instance exceeds what the solver can represent.
    /// - `Infeasible` when no hamiltonian cycle exists under the instance's
    ///   forbidden-edge constraints.
    fn solve(&mut self) -> Result<Tour, Error>;
}
