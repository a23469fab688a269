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


//! # ATSP
//! ATSP is a small library of exact and approximate solvers for the
//! asymmetric travelling salesman problem. An instance is a complete (or
//! almost complete) directed graph with non-negative edge costs where the
//! cost of travelling from `i` to `j` need not equal that of travelling
//! from `j` to `i`. The goal is to find a minimum cost hamiltonian cycle.
//!
//! Because a cycle is invariant under rotation, every tour is anchored at
//! the highest-numbered vertex of the instance. A solution is therefore
//! reported as a `Tour`: the total cost of the cycle along with the order
//! in which the `n-1` other vertices are visited after leaving the start.
//!
//! The library provides three exact solvers and two heuristics, all behind
//! the same `Solver` trait:
//!
//! * `BruteForce` scores every permutation of the non-start vertices. It is
//!   only usable on tiny instances but serves as the reference the smarter
//!   solvers are checked against.
//! * `HeldKarp` implements the Held-Karp dynamic program over subsets of
//!   vertices. Exponential memory, but much faster than enumeration.
//! * `BranchAndBound` implements the reduction-based branch and bound of
//!   Little et al. It is the solver of choice for larger instances.
//! * `NearestNeighbour` and `GreedyEdges` trade optimality for speed.
//!
//! ## Quick Example
//! The following solves a small 4-vertex instance to optimality. The costs
//! are given row by row, with the entry at row `i`, column `j` being the
//! cost of the edge from `i` to `j` (the diagonal is meaningless and always
//! ignored).
//!
//! ```
//! use atsp::*;
//!
//! // 1. Load the instance into an adjacency matrix.
//! let graph = AdjacencyMatrix::from_costs(vec![
//!     vec![0, 10, 15, 20],
//!     vec![5,  0,  9, 10],
//!     vec![6, 13,  0, 12],
//!     vec![8,  8,  9,  0],
//! ]).unwrap();
//!
//! // 2. Pick a solver and run it.
//! let tour = BranchAndBound::new(&graph).solve().unwrap();
//!
//! // 3. The optimal cycle is 3 -> 2 -> 0 -> 1 -> 3 for a total cost of 35.
//! assert_eq!(35, tour.cost);
//! assert_eq!(vec![2, 0, 1], tour.order);
//! ```
//!
//! Edges can be forbidden altogether by building the matrix from
//! `Option<isize>` cells with `AdjacencyMatrix::new`; an instance that
//! admits no hamiltonian cycle makes every exact solver answer
//! `Error::Infeasible`.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
