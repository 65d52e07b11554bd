//! End-to-end scenarios through the public generator and registry APIs.
//!
//! Each test builds a generator the way a player would, runs it, and checks
//! the terminal step against a known answer or against a second algorithm
//! solving the same problem.

use std::collections::BTreeSet;

use algotrace_core::{AlgorithmId, CoreError, DemoGraph, Outcome, StepKind, TraceGenerator};
use algotrace_engine::contracts::reference;
use algotrace_engine::dp::{
    CoinChange, Fibonacci, FibonacciMode, Knapsack, LongestCommonSubsequence,
    MatrixChainMultiplication,
};
use algotrace_engine::graph::{
    self, BellmanFord, Dijkstra, Kruskal, Prim, TopologicalSort, TopologicalVariant,
};
use algotrace_engine::searching::BinarySearch;
use algotrace_engine::sorting::BubbleSort;
use algotrace_engine::{generate, EngineError, TraceRequest};
use serde_json::json;

// ---------------------------------------------------------------------------
// Sorting and searching
// ---------------------------------------------------------------------------

#[test]
fn bubble_sort_small_array() {
    let trace = BubbleSort::new([5, 3, 8, 1]).generate_steps();
    let last = trace.last().unwrap();
    assert_eq!(last.data.array, vec![1, 3, 5, 8]);
    assert_eq!(last.data.sorted, BTreeSet::from([0, 1, 2, 3]));
    assert!(last.completed);
}

#[test]
fn bubble_sort_emits_a_step_per_compared_pair() {
    for n in [2usize, 5, 9] {
        let input: Vec<i64> = (0..n as i64).rev().collect();
        let trace = BubbleSort::new(input).generate_steps();
        assert!(trace.len() >= n * (n - 1) / 2, "too few steps for n = {}", n);
    }
}

#[test]
fn binary_search_probes_middle_then_finds_target() {
    let trace = BinarySearch::new([1, 3, 5, 7, 9], 7).generate_steps();
    let probe = trace
        .iter()
        .position(|s| s.data.comparing.as_slice() == [2])
        .expect("mid = 2 is probed");
    assert_eq!(trace[probe].data.array[2], 5);

    let last = trace.last().unwrap();
    assert!(probe < last.id.0 as usize);
    assert_eq!(last.kind.outcome(), Some(Outcome::Found { index: 3 }));
    assert_eq!(last.data.sorted, BTreeSet::from([3]));
}

#[test]
fn binary_search_absent_value_never_marks_found() {
    let trace = BinarySearch::new([1, 3, 5, 7, 9], 4).generate_steps();
    assert!(trace.iter().all(|s| s.data.sorted.is_empty()));
    assert_eq!(trace.last().unwrap().kind.outcome(), Some(Outcome::NotFound));
}

// ---------------------------------------------------------------------------
// Dynamic programming
// ---------------------------------------------------------------------------

#[test]
fn fibonacci_ten_is_fifty_five() {
    for mode in [FibonacciMode::Tabulated, FibonacciMode::Memoized] {
        let trace = Fibonacci::new(10, mode).unwrap().generate_steps();
        let first = &trace[0];
        assert_eq!(first.data.table[0], Some(0));
        assert_eq!(trace.last().unwrap().data.result, Some(55));
    }
}

#[test]
fn coin_change_eleven_needs_three_coins() {
    let trace = CoinChange::new(vec![1, 2, 5], 11).unwrap().generate_steps();
    let last = trace.last().unwrap();
    assert_eq!(last.data.result, Some(3));
    assert_eq!(last.data.table[0], Some(0));
    assert_eq!(last.data.coins_used.iter().sum::<usize>(), 11);
}

#[test]
fn lcs_length_is_four() {
    let trace = LongestCommonSubsequence::new("ABCBDAB", "BDCABA").generate_steps();
    let last = trace.last().unwrap();
    assert_eq!(last.data.result, Some(4));
    assert_eq!(last.data.subsequence.chars().count(), 4);
}

// ---------------------------------------------------------------------------
// Graphs
// ---------------------------------------------------------------------------

fn mst_weight<G>(generator: &G) -> i64
where
    G: TraceGenerator<State = graph::MstState>,
{
    let trace = generator.generate_steps();
    let last = trace.last().unwrap();
    assert_eq!(last.kind.outcome(), Some(Outcome::Solved));
    last.data.total_weight
}

#[test]
fn kruskal_and_prim_agree_on_demo_graph() {
    let kruskal = mst_weight(&Kruskal::default());
    let prim = mst_weight(&Prim::default());
    assert_eq!(kruskal, prim);
    assert_eq!(kruskal, reference::spanning_weight(&graph::mst_demo()));
}

#[test]
fn kruskal_and_prim_agree_on_custom_graph() {
    let graph = DemoGraph::from_edges(
        6,
        false,
        [(0, 1, 7), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)],
    )
    .unwrap();
    let kruskal = mst_weight(&Kruskal::new(graph.clone()).unwrap());
    let prim = mst_weight(&Prim::new(graph.clone(), 3).unwrap());
    assert_eq!(kruskal, prim);
    assert_eq!(kruskal, reference::spanning_weight(&graph));
}

#[test]
fn shortest_paths_match_reference() {
    let dijkstra = Dijkstra::default().generate_steps();
    let expected = reference::single_source(&graph::dijkstra_demo(), 0).unwrap();
    assert_eq!(dijkstra.last().unwrap().data.distances, expected);

    let bellman = BellmanFord::default().generate_steps();
    let expected = reference::single_source(&graph::bellman_ford_demo(), 0).unwrap();
    assert_eq!(bellman.last().unwrap().data.distances, expected);
}

#[test]
fn dijkstra_and_bellman_ford_agree_on_positive_graph() {
    let graph = graph::dijkstra_demo();
    let a = Dijkstra::new(graph.clone(), 2).unwrap().generate_steps();
    let b = BellmanFord::new(graph, 2).unwrap().generate_steps();
    assert_eq!(a.last().unwrap().data.distances, b.last().unwrap().data.distances);
}

#[test]
fn topological_orders_respect_every_edge() {
    let graph = graph::dag_demo();
    for variant in [TopologicalVariant::DepthFirst, TopologicalVariant::Kahn] {
        let trace = TopologicalSort::new(graph.clone(), variant)
            .unwrap()
            .generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::Solved));
        assert_eq!(last.data.order.len(), graph.vertex_count());
        assert!(reference::respects_edges(&graph, &last.data.order));
    }
}

#[test]
fn topological_sort_reports_cycle() {
    let cyclic = DemoGraph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
    for variant in [TopologicalVariant::DepthFirst, TopologicalVariant::Kahn] {
        let trace = TopologicalSort::new(cyclic.clone(), variant)
            .unwrap()
            .generate_steps();
        assert_eq!(
            trace.last().unwrap().kind.outcome(),
            Some(Outcome::CycleDetected)
        );
    }
}

// ---------------------------------------------------------------------------
// Whole catalogue
// ---------------------------------------------------------------------------

#[test]
fn every_algorithm_is_deterministic() {
    let request = TraceRequest::default();
    for id in AlgorithmId::ALL {
        let first = generate(id, &request).unwrap();
        let second = generate(id, &request).unwrap();
        assert_eq!(first.steps, second.steps, "{} is not deterministic", id);
    }
}

#[test]
fn every_trace_starts_with_init_and_ends_with_one_complete() {
    for id in AlgorithmId::ALL {
        let bundle = generate(id, &TraceRequest::default()).unwrap();
        assert_eq!(bundle.info.id, id);
        assert_eq!(bundle.steps[0].kind, StepKind::Init, "{}", id);
        let completes = bundle.steps.iter().filter(|s| s.kind.is_terminal()).count();
        assert_eq!(completes, 1, "{}", id);
        assert!(bundle.steps.last().unwrap().completed, "{}", id);
    }
}

#[test]
fn registry_threads_request_into_generator() {
    let request = TraceRequest::with_input(vec![1, 3, 5, 7, 9]).with_target(7);
    let bundle = generate(AlgorithmId::BinarySearch, &request).unwrap();
    let last = bundle.steps.last().unwrap();
    assert_eq!(last.data["sorted"], serde_json::json!([3]));
}

// ---------------------------------------------------------------------------
// Caller-supplied parameters at the edges
// ---------------------------------------------------------------------------

#[test]
fn zero_weight_edges_are_refused_through_the_registry() {
    let request = TraceRequest::default().with_params(json!({
        "graph": {"vertices": 2, "directed": true, "edges": [[0, 1, 0]]}
    }));
    for id in [AlgorithmId::Dijkstra, AlgorithmId::BellmanFord, AlgorithmId::Prim] {
        match generate(id, &request) {
            Err(EngineError::Core(CoreError::InvalidGraph { .. })) => {}
            other => panic!("{}: expected InvalidGraph, got {:?}", id, other.map(|b| b.steps.len())),
        }
    }
}

#[test]
fn parallel_edges_agree_across_mst_algorithms() {
    let graph = DemoGraph::from_edges(3, false, [(0, 1, 1), (0, 1, 5), (1, 2, 4), (1, 2, 2)]).unwrap();
    let kruskal = mst_weight(&Kruskal::new(graph.clone()).unwrap());
    let prim = mst_weight(&Prim::new(graph.clone(), 0).unwrap());
    assert_eq!(kruskal, 3);
    assert_eq!(prim, kruskal);
    assert_eq!(reference::spanning_weight(&graph), kruskal);
}

#[test]
fn parallel_edges_give_shortest_distances() {
    let graph = DemoGraph::from_edges(3, true, [(0, 1, 5), (0, 1, 1), (1, 2, 7), (1, 2, 3)]).unwrap();
    let expected = reference::single_source(&graph, 0).unwrap();
    assert_eq!(expected, vec![Some(0), Some(1), Some(4)]);

    let dijkstra = Dijkstra::new(graph.clone(), 0).unwrap().generate_steps();
    assert_eq!(dijkstra.last().unwrap().data.distances, expected);
    let bellman = BellmanFord::new(graph, 0).unwrap().generate_steps();
    assert_eq!(bellman.last().unwrap().data.distances, expected);
}

#[test]
fn weightless_knapsack_item_matches_reference() {
    for capacity in [0, 3] {
        let trace = Knapsack::new(vec![0, 2], vec![5, 4], capacity)
            .unwrap()
            .generate_steps();
        let expected = reference::knapsack(&[0, 2], &[5, 4], capacity);
        assert_eq!(trace.last().unwrap().data.result, Some(expected));
    }
}

#[test]
fn overflowing_matrix_chain_is_a_typed_error() {
    assert!(MatrixChainMultiplication::new(vec![(10_000_000, 10_000_000); 3]).is_err());

    let request = TraceRequest::default().with_params(json!({
        "dimensions": [[10000000, 10000000], [10000000, 10000000], [10000000, 10000000]]
    }));
    assert!(matches!(
        generate(AlgorithmId::MatrixChainMultiplication, &request),
        Err(EngineError::Core(CoreError::InvalidInput { .. }))
    ));
}
