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

//! End to end checks of the solvers against one another: every exact solver
//! must report the same optimum on the same instance, every reported tour
//! must rescore to its announced cost, and the heuristics must never beat
//! the optimum.

use atsp::*;

fn worked_example() -> AdjacencyMatrix {
    AdjacencyMatrix::from_costs(vec![
        vec![0, 10, 15, 20],
        vec![5, 0, 9, 10],
        vec![6, 13, 0, 12],
        vec![8, 8, 9, 0],
    ])
    .unwrap()
}

fn instance_6() -> AdjacencyMatrix {
    AdjacencyMatrix::from_costs(vec![
        vec![0, 29, 82, 46, 68, 52],
        vec![55, 0, 46, 68, 1, 72],
        vec![30, 42, 0, 55, 23, 43],
        vec![20, 25, 80, 0, 81, 29],
        vec![21, 16, 27, 10, 0, 50],
        vec![72, 6, 17, 58, 31, 0],
    ])
    .unwrap()
}

fn instance_7() -> AdjacencyMatrix {
    AdjacencyMatrix::from_costs(vec![
        vec![0, 3, 75, 49, 12, 90, 25],
        vec![51, 0, 62, 7, 44, 18, 83],
        vec![29, 95, 0, 31, 5, 66, 40],
        vec![8, 57, 22, 0, 78, 13, 92],
        vec![60, 14, 37, 85, 0, 48, 2],
        vec![19, 70, 53, 26, 91, 0, 34],
        vec![42, 6, 11, 64, 38, 77, 0],
    ])
    .unwrap()
}

fn directed_ring(n: usize) -> AdjacencyMatrix {
    let rows = (0..n)
        .map(|i| (0..n).map(|j| if j == (i + 1) % n { 1 } else { 10 }).collect())
        .collect::<Vec<Vec<isize>>>();
    AdjacencyMatrix::from_costs(rows).unwrap()
}

fn exact_costs(graph: &AdjacencyMatrix) -> Vec<isize> {
    vec![
        BruteForce::new(graph).solve().unwrap().cost,
        HeldKarp::new(graph).solve().unwrap().cost,
        BranchAndBound::new(graph).solve().unwrap().cost,
    ]
}

#[test]
fn every_exact_solver_finds_the_known_optimum_of_the_worked_example() {
    let graph = worked_example();
    assert_eq!(vec![35, 35, 35], exact_costs(&graph));
}

#[test]
fn exact_solvers_agree_on_a_six_vertex_instance() {
    let graph = instance_6();
    let costs = exact_costs(&graph);
    assert_eq!(costs[0], costs[1]);
    assert_eq!(costs[0], costs[2]);
}

#[test]
fn exact_solvers_agree_on_a_seven_vertex_instance() {
    let graph = instance_7();
    let costs = exact_costs(&graph);
    assert_eq!(costs[0], costs[1]);
    assert_eq!(costs[0], costs[2]);
}

#[test]
fn every_exact_solver_recovers_a_directed_ring() {
    for n in 3..=8 {
        let graph = directed_ring(n);
        let expected = vec![n as isize; 3];
        assert_eq!(expected, exact_costs(&graph));
    }
}

#[test]
fn every_reported_tour_rescores_to_its_announced_cost() {
    let graph = instance_7();
    let tours = vec![
        BruteForce::new(&graph).solve().unwrap(),
        HeldKarp::new(&graph).solve().unwrap(),
        BranchAndBound::new(&graph).solve().unwrap(),
        NearestNeighbour::new(&graph).solve().unwrap(),
        GreedyEdges::new(&graph).solve().unwrap(),
    ];
    for tour in tours {
        assert_eq!(Ok(tour.cost), tour_cost(&graph, &tour.order));
    }
}

#[test]
fn heuristics_never_beat_the_optimum() {
    for graph in [worked_example(), instance_6(), instance_7()] {
        let optimum = HeldKarp::new(&graph).solve().unwrap().cost;
        assert!(NearestNeighbour::new(&graph).solve().unwrap().cost >= optimum);
        assert!(GreedyEdges::new(&graph).solve().unwrap().cost >= optimum);
    }
}

#[test]
fn an_instance_with_no_hamiltonian_cycle_is_infeasible_for_every_exact_solver() {
    // vertex 1 can never be entered
    let graph = AdjacencyMatrix::new(vec![
        vec![None, None, Some(2), Some(4)],
        vec![Some(3), None, Some(1), Some(5)],
        vec![Some(2), None, None, Some(8)],
        vec![Some(6), None, Some(7), None],
    ])
    .unwrap();
    assert_eq!(Err(Error::Infeasible), BruteForce::new(&graph).solve());
    assert_eq!(Err(Error::Infeasible), HeldKarp::new(&graph).solve());
    assert_eq!(Err(Error::Infeasible), BranchAndBound::new(&graph).solve());
}

#[test]
fn a_forbidden_edge_redirects_every_exact_solver() {
    // strike the cheap closing edge 1 -> 3 of the worked example's optimum
    let graph = AdjacencyMatrix::new(vec![
        vec![None, Some(10), Some(15), Some(20)],
        vec![Some(5), None, Some(9), None],
        vec![Some(6), Some(13), None, Some(12)],
        vec![Some(8), Some(8), Some(9), None],
    ])
    .unwrap();
    let costs = exact_costs(&graph);
    assert_eq!(costs[0], costs[1]);
    assert_eq!(costs[0], costs[2]);
    assert!(costs[0] > 35);
}

#[test]
fn undersized_instances_are_rejected_by_the_matrix_constructor() {
    assert!(matches!(
        AdjacencyMatrix::from_costs(vec![vec![0]]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn negative_costs_are_rejected_by_the_matrix_constructor() {
    assert!(matches!(
        AdjacencyMatrix::from_costs(vec![vec![0, -3], vec![2, 0]]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn undersized_graphs_are_rejected_by_every_solver() {
    struct Lonely;
    impl Graph for Lonely {
        fn vertex_count(&self) -> usize {
            1
        }
        fn edge_cost(&self, _: usize, _: usize) -> Option<isize> {
            None
        }
    }
    let graph = Lonely;
    assert!(matches!(BruteForce::new(&graph).solve(), Err(Error::InvalidInput(_))));
    assert!(matches!(HeldKarp::new(&graph).solve(), Err(Error::InvalidInput(_))));
    assert!(matches!(BranchAndBound::new(&graph).solve(), Err(Error::InvalidInput(_))));
    assert!(matches!(NearestNeighbour::new(&graph).solve(), Err(Error::InvalidInput(_))));
    assert!(matches!(GreedyEdges::new(&graph).solve(), Err(Error::InvalidInput(_))));
}
