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

//! This demo reads an asymmetric travelling salesman instance from a file and
//! solves it with one of the available solvers. The expected file format is
//! plain text: the first line gives the number of vertices `n`, and the next
//! `n` lines each carry `n` whitespace-separated integers (the cost matrix,
//! row by row). A negative entry denotes a forbidden edge and the diagonal is
//! ignored.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path, time::Instant};

use atsp::*;
use clap::{Parser, ValueEnum};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file
    fname: String,
    /// The solving method to apply to the instance
    #[clap(short, long, value_enum, default_value_t = Method::BranchAndBound)]
    method: Method,
}

/// The solving methods one can choose from on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Exhaustive enumeration of every tour (tiny instances only)
    BruteForce,
    /// Held-Karp dynamic programming over vertex subsets
    HeldKarp,
    /// Reduction based branch and bound
    BranchAndBound,
    /// Nearest neighbour heuristic (fast, not exact)
    NearestNeighbour,
    /// Greedy edge selection heuristic (fast, not exact)
    GreedyEdges,
}

/// This enumeration simply groups the kind of errors that might occur when
/// parsing an instance from file: io errors, integers that fail to parse,
/// and files whose shape does not match the announced vertex count.
#[derive(Debug, thiserror::Error)]
enum ReadError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The file does not carry the announced number of rows or columns
    #[error("the file does not match the announced instance size")]
    Shape,
}

/// Reads an instance file into an adjacency matrix, mapping negative entries
/// to forbidden edges.
fn read_instance<P: AsRef<Path>>(fname: P) -> Result<AdjacencyMatrix, ReadError> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);

    let mut n = 0_usize;
    let mut rows = vec![];

    for (lc, line) in f.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if lc == 0 {
            n = line.parse::<usize>()?;
        } else {
            let row = line
                .split_whitespace()
                .map(|token| token.parse::<isize>().map(|c| if c < 0 { None } else { Some(c) }))
                .collect::<Result<Vec<Option<isize>>, ParseIntError>>()?;
            if row.len() != n {
                return Err(ReadError::Shape);
            }
            rows.push(row);
        }
    }
    if rows.len() != n {
        return Err(ReadError::Shape);
    }

    AdjacencyMatrix::new(rows).map_err(|_| ReadError::Shape)
}

fn main() {
    let args = Args::parse();
    let graph = match read_instance(&args.fname) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("cannot read {}: {}", args.fname, e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let outcome = match args.method {
        Method::BruteForce => BruteForce::new(&graph).solve(),
        Method::HeldKarp => HeldKarp::new(&graph).solve(),
        Method::BranchAndBound => BranchAndBound::new(&graph).solve(),
        Method::NearestNeighbour => NearestNeighbour::new(&graph).solve(),
        Method::GreedyEdges => GreedyEdges::new(&graph).solve(),
    };
    let duration = start.elapsed();

    match outcome {
        Ok(tour) => {
            println!("Duration:   {:.3} seconds", duration.as_secs_f32());
            println!("Objective:  {}",            tour.cost);
            println!("Solution:   {:?}",          tour.order);
        }
        Err(e) => {
            eprintln!("no tour: {}", e);
            std::process::exit(1);
        }
    }
}
