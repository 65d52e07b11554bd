//! Trace contracts: structural checks, reference comparisons and a seeded
//! property harness.
//!
//! Nothing here runs during normal trace generation. [`verify_catalogue`]
//! builds every generator with its demonstration defaults and compares the
//! terminal step against a straightforward untraced implementation from
//! [`reference`]; [`property::run_property_tests`] feeds random arrays to the
//! sorting and searching generators.

pub mod check;
pub mod property;
pub mod reference;

use algotrace_core::{AlgorithmId, DemoGraph, Outcome, StepId, Trace, TraceGenerator};
use serde::{Deserialize, Serialize};

use crate::dp;
use crate::graph;
use crate::searching;
use crate::sorting::{self, DEMO_ARRAY};

/// Which family of rule a violation broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Step ordering, ids, `Init`/`Complete` placement.
    Structure,
    /// Array length, index bounds, settled-set monotonicity.
    ArrayInvariant,
    /// The terminal result disagrees with the reference implementation.
    Result,
}

/// A single broken rule, pointing at the offending step when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceViolation {
    pub kind: ViolationKind,
    pub step: Option<StepId>,
    pub message: String,
}

impl TraceViolation {
    pub fn new(kind: ViolationKind, step: Option<StepId>, message: impl Into<String>) -> Self {
        TraceViolation {
            kind,
            step,
            message: message.into(),
        }
    }

    pub(crate) fn result(message: impl Into<String>) -> Self {
        TraceViolation::new(ViolationKind::Result, None, message)
    }
}

/// Violations found for one algorithm by [`verify_catalogue`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueCheck {
    pub algorithm: AlgorithmId,
    pub steps: usize,
    pub violations: Vec<TraceViolation>,
}

impl CatalogueCheck {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks every algorithm's default trace against its reference result.
pub fn verify_catalogue() -> Vec<CatalogueCheck> {
    AlgorithmId::ALL
        .iter()
        .map(|&id| {
            let (steps, violations) = verify_default(id);
            for violation in &violations {
                tracing::warn!("{}: {}", id, violation.message);
            }
            CatalogueCheck {
                algorithm: id,
                steps,
                violations,
            }
        })
        .collect()
}

fn with_structure<S>(trace: &Trace<S>, mut extra: Vec<TraceViolation>) -> (usize, Vec<TraceViolation>) {
    let mut violations = check::check_structure(trace);
    violations.append(&mut extra);
    (trace.len(), violations)
}

fn expect_eq<T: PartialEq + std::fmt::Debug>(what: &str, actual: T, expected: T) -> Vec<TraceViolation> {
    if actual == expected {
        Vec::new()
    } else {
        vec![TraceViolation::result(format!(
            "{}: trace ends with {:?}, reference gives {:?}",
            what, actual, expected
        ))]
    }
}

fn sorting_check<G>(generator: G) -> (usize, Vec<TraceViolation>)
where
    G: TraceGenerator<State = algotrace_core::ArrayState>,
{
    let trace = generator.generate_steps();
    (trace.len(), check::check_sorting(&trace, &DEMO_ARRAY))
}

fn distances_of(graph: &DemoGraph, source: usize, trace_end: Option<&Vec<Option<i64>>>) -> Vec<TraceViolation> {
    let expected = reference::single_source(graph, source);
    match (trace_end, expected) {
        (Some(actual), Some(expected)) => expect_eq("distances", actual.clone(), expected),
        (None, None) => Vec::new(),
        (actual, expected) => vec![TraceViolation::result(format!(
            "negative cycle disagreement: trace {:?}, reference {:?}",
            actual, expected
        ))],
    }
}

fn verify_default(id: AlgorithmId) -> (usize, Vec<TraceViolation>) {
    match id {
        AlgorithmId::BubbleSort => sorting_check(sorting::BubbleSort::default()),
        AlgorithmId::SelectionSort => sorting_check(sorting::SelectionSort::default()),
        AlgorithmId::InsertionSort => sorting_check(sorting::InsertionSort::default()),
        AlgorithmId::MergeSort => sorting_check(sorting::MergeSort::default()),
        AlgorithmId::QuickSort => sorting_check(sorting::QuickSort::default()),
        AlgorithmId::HeapSort => sorting_check(sorting::HeapSort::default()),
        AlgorithmId::LinearSearch => {
            let trace = searching::LinearSearch::default().generate_steps();
            (trace.len(), check::check_search(&trace, searching::DEMO_TARGET))
        }
        AlgorithmId::BinarySearch => {
            let trace = searching::BinarySearch::default().generate_steps();
            (trace.len(), check::check_search(&trace, searching::DEMO_TARGET))
        }
        AlgorithmId::DepthFirstSearch => {
            let demo = graph::traversal_demo();
            let trace = graph::DepthFirstSearch::default().generate_steps();
            let visited = trace.last().map(|s| s.data.visited.len()).unwrap_or_default();
            let extra = expect_eq("visited count", visited, reference::reachable_count(&demo, 0));
            with_structure(&trace, extra)
        }
        AlgorithmId::BreadthFirstSearch => {
            let demo = graph::traversal_demo();
            let trace = graph::BreadthFirstSearch::default().generate_steps();
            let visited = trace.last().map(|s| s.data.visited.len()).unwrap_or_default();
            let extra = expect_eq("visited count", visited, reference::reachable_count(&demo, 0));
            with_structure(&trace, extra)
        }
        AlgorithmId::Dijkstra => {
            let trace = graph::Dijkstra::default().generate_steps();
            let actual = trace.last().map(|s| &s.data.distances);
            let extra = distances_of(&graph::dijkstra_demo(), 0, actual);
            with_structure(&trace, extra)
        }
        AlgorithmId::BellmanFord => {
            let trace = graph::BellmanFord::default().generate_steps();
            let actual = trace
                .last()
                .filter(|s| s.kind.outcome() != Some(Outcome::NegativeCycle))
                .map(|s| &s.data.distances);
            let extra = distances_of(&graph::bellman_ford_demo(), 0, actual);
            with_structure(&trace, extra)
        }
        AlgorithmId::FloydWarshall => {
            let trace = graph::FloydWarshall::default().generate_steps();
            let actual = trace
                .last()
                .filter(|s| s.kind.outcome() != Some(Outcome::NegativeCycle))
                .map(|s| s.data.distances.clone());
            let extra = expect_eq(
                "distance matrix",
                actual,
                reference::all_pairs(&graph::floyd_warshall_demo()),
            );
            with_structure(&trace, extra)
        }
        AlgorithmId::Kruskal => {
            let trace = graph::Kruskal::default().generate_steps();
            let weight = trace.last().map(|s| s.data.total_weight);
            let extra = expect_eq("tree weight", weight, Some(reference::spanning_weight(&graph::mst_demo())));
            with_structure(&trace, extra)
        }
        AlgorithmId::Prim => {
            let trace = graph::Prim::default().generate_steps();
            let weight = trace.last().map(|s| s.data.total_weight);
            let extra = expect_eq("tree weight", weight, Some(reference::spanning_weight(&graph::mst_demo())));
            with_structure(&trace, extra)
        }
        AlgorithmId::TopologicalSort => {
            let demo = graph::dag_demo();
            let mut extra = Vec::new();
            let mut steps = 0;
            match reference::topological_order(&demo) {
                Some(order) if reference::respects_edges(&demo, &order) => {}
                Some(order) => extra.push(TraceViolation::result(format!(
                    "reference order {:?} breaks an edge",
                    order
                ))),
                None => extra.push(TraceViolation::result("demonstration graph has a cycle")),
            }
            for variant in [graph::TopologicalVariant::DepthFirst, graph::TopologicalVariant::Kahn] {
                let trace = match graph::TopologicalSort::new(demo.clone(), variant) {
                    Ok(sort) => sort.generate_steps(),
                    Err(e) => return (steps, vec![TraceViolation::result(e.to_string())]),
                };
                steps += trace.len();
                extra.extend(check::check_structure(&trace));
                let order = trace.last().map(|s| s.data.order.clone()).unwrap_or_default();
                if order.len() != demo.vertex_count() || !reference::respects_edges(&demo, &order) {
                    extra.push(TraceViolation::result(format!(
                        "{:?} order {:?} is not a topological order",
                        variant, order
                    )));
                }
            }
            (steps, extra)
        }
        AlgorithmId::Fibonacci => {
            let n = dp::fibonacci::DEMO_N;
            let mut extra = Vec::new();
            let mut steps = 0;
            for mode in [dp::FibonacciMode::Tabulated, dp::FibonacciMode::Memoized] {
                let trace = match dp::Fibonacci::new(n, mode) {
                    Ok(fib) => fib.generate_steps(),
                    Err(e) => return (steps, vec![TraceViolation::result(e.to_string())]),
                };
                steps += trace.len();
                extra.extend(check::check_structure(&trace));
                let result = trace.last().and_then(|s| s.data.result);
                extra.extend(expect_eq("F(n)", result, Some(reference::fibonacci(n))));
            }
            (steps, extra)
        }
        AlgorithmId::Knapsack => {
            let trace = dp::Knapsack::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected = reference::knapsack(
                &dp::knapsack::DEMO_WEIGHTS,
                &dp::knapsack::DEMO_VALUES,
                dp::knapsack::DEMO_CAPACITY,
            );
            with_structure(&trace, expect_eq("best value", result, Some(expected)))
        }
        AlgorithmId::LongestCommonSubsequence => {
            let trace = dp::LongestCommonSubsequence::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected = reference::lcs_length(dp::lcs::DEMO_FIRST, dp::lcs::DEMO_SECOND);
            with_structure(&trace, expect_eq("LCS length", result, Some(expected)))
        }
        AlgorithmId::LongestIncreasingSubsequence => {
            let trace = dp::LongestIncreasingSubsequence::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected = reference::lis_length(&dp::lis::DEMO_ARRAY);
            with_structure(&trace, expect_eq("LIS length", result, Some(expected)))
        }
        AlgorithmId::EditDistance => {
            let trace = dp::EditDistance::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected =
                reference::edit_distance(dp::edit_distance::DEMO_SOURCE, dp::edit_distance::DEMO_TARGET);
            with_structure(&trace, expect_eq("edit distance", result, Some(expected)))
        }
        AlgorithmId::CoinChange => {
            let trace = dp::CoinChange::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected =
                reference::coin_change(&dp::coin_change::DEMO_COINS, dp::coin_change::DEMO_AMOUNT);
            with_structure(&trace, expect_eq("coin count", result, Some(expected)))
        }
        AlgorithmId::MatrixChainMultiplication => {
            let trace = dp::MatrixChainMultiplication::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected = reference::matrix_chain(&dp::matrix_chain::DEMO_DIMENSIONS);
            with_structure(&trace, expect_eq("multiplications", result, Some(expected)))
        }
        AlgorithmId::PalindromePartitioning => {
            let trace = dp::PalindromePartitioning::default().generate_steps();
            let result = trace.last().and_then(|s| s.data.result);
            let expected = reference::palindrome_cuts(dp::palindrome::DEMO_TEXT);
            with_structure(&trace, expect_eq("cuts", result, Some(expected)))
        }
    }
}
