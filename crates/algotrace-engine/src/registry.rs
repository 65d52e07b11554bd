//! Algorithm selection: id plus request in, type-erased generator out.
//!
//! [`build`] validates a [`TraceRequest`] against the chosen algorithm and
//! returns a [`DynTraceGenerator`], which every [`TraceGenerator`] implements
//! through a blanket impl. Its payloads are converted to `serde_json::Value`
//! so a player can handle every family through one [`TraceBundle`] type.
//!
//! Missing inputs fall back to the bundled demonstration values. The one
//! exception: a search given an array must also be given a target.

use algotrace_core::{AlgorithmId, AlgorithmInfo, DemoGraph, Step, TraceGenerator};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::dp::{self, FibonacciMode};
use crate::error::EngineError;
use crate::graph::{self, TopologicalVariant};
use crate::searching::{self, DEMO_TARGET};
use crate::sorting::{self, DEMO_ARRAY};

/// Everything a caller can supply for one trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceRequest {
    /// Array for the sorting and searching families and LIS.
    pub input: Option<Vec<i64>>,
    /// Value to search for.
    pub target: Option<i64>,
    /// Algorithm-specific parameters. `null` keeps every default.
    pub params: serde_json::Value,
}

impl TraceRequest {
    pub fn with_input(input: impl Into<Vec<i64>>) -> Self {
        TraceRequest {
            input: Some(input.into()),
            ..TraceRequest::default()
        }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }
}

/// A generated trace with JSON payloads, ready for a player.
#[derive(Debug, Clone, Serialize)]
pub struct TraceBundle {
    pub info: AlgorithmInfo,
    pub steps: Vec<Step<serde_json::Value>>,
}

/// Object-safe view of a [`TraceGenerator`].
pub trait DynTraceGenerator {
    fn info(&self) -> AlgorithmInfo;

    /// Runs the generator and converts every payload to JSON.
    fn generate_bundle(&self) -> Result<TraceBundle, EngineError>;
}

impl<G: TraceGenerator> DynTraceGenerator for G {
    fn info(&self) -> AlgorithmInfo {
        self.algorithm_info()
    }

    fn generate_bundle(&self) -> Result<TraceBundle, EngineError> {
        let info = self.algorithm_info();
        let steps = self
            .generate_steps()
            .into_iter()
            .map(|step| {
                let id = step.id.0;
                step.map_data(|data| {
                    serde_json::to_value(data).map_err(|e| EngineError::Serialization {
                        step: id,
                        message: e.to_string(),
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("generated {} steps for {}", steps.len(), info.id);
        Ok(TraceBundle { info, steps })
    }
}

/// Static metadata for `id`, without building a generator.
pub fn info(id: AlgorithmId) -> AlgorithmInfo {
    match id {
        AlgorithmId::BubbleSort => sorting::bubble::INFO,
        AlgorithmId::SelectionSort => sorting::selection::INFO,
        AlgorithmId::InsertionSort => sorting::insertion::INFO,
        AlgorithmId::MergeSort => sorting::merge::INFO,
        AlgorithmId::QuickSort => sorting::quick::INFO,
        AlgorithmId::HeapSort => sorting::heap::INFO,
        AlgorithmId::LinearSearch => searching::linear::INFO,
        AlgorithmId::BinarySearch => searching::binary::INFO,
        AlgorithmId::DepthFirstSearch => graph::dfs::INFO,
        AlgorithmId::BreadthFirstSearch => graph::bfs::INFO,
        AlgorithmId::Dijkstra => graph::dijkstra::INFO,
        AlgorithmId::BellmanFord => graph::bellman_ford::INFO,
        AlgorithmId::FloydWarshall => graph::floyd_warshall::INFO,
        AlgorithmId::Kruskal => graph::kruskal::INFO,
        AlgorithmId::Prim => graph::prim::INFO,
        AlgorithmId::TopologicalSort => graph::topological::INFO,
        AlgorithmId::Fibonacci => dp::fibonacci::INFO,
        AlgorithmId::Knapsack => dp::knapsack::INFO,
        AlgorithmId::LongestCommonSubsequence => dp::lcs::INFO,
        AlgorithmId::LongestIncreasingSubsequence => dp::lis::INFO,
        AlgorithmId::EditDistance => dp::edit_distance::INFO,
        AlgorithmId::CoinChange => dp::coin_change::INFO,
        AlgorithmId::MatrixChainMultiplication => dp::matrix_chain::INFO,
        AlgorithmId::PalindromePartitioning => dp::palindrome::INFO,
    }
}

/// Metadata for every algorithm, in catalogue order.
pub fn catalogue() -> Vec<AlgorithmInfo> {
    AlgorithmId::ALL.iter().map(|&id| info(id)).collect()
}

/// Builds the generator for `id` from `request`.
pub fn build(
    id: AlgorithmId,
    request: &TraceRequest,
) -> Result<Box<dyn DynTraceGenerator>, EngineError> {
    let array = || request.input.clone().unwrap_or_else(|| DEMO_ARRAY.to_vec());
    let generator: Box<dyn DynTraceGenerator> = match id {
        AlgorithmId::BubbleSort => Box::new(sorting::BubbleSort::new(array())),
        AlgorithmId::SelectionSort => Box::new(sorting::SelectionSort::new(array())),
        AlgorithmId::InsertionSort => Box::new(sorting::InsertionSort::new(array())),
        AlgorithmId::MergeSort => Box::new(sorting::MergeSort::new(array())),
        AlgorithmId::QuickSort => Box::new(sorting::QuickSort::new(array())),
        AlgorithmId::HeapSort => Box::new(sorting::HeapSort::new(array())),
        AlgorithmId::LinearSearch => {
            let (input, target) = search_input(id, request)?;
            Box::new(searching::LinearSearch::new(input, target))
        }
        AlgorithmId::BinarySearch => {
            let (input, target) = search_input(id, request)?;
            Box::new(searching::BinarySearch::new(input, target))
        }
        AlgorithmId::DepthFirstSearch => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(false, graph::traversal_demo)?;
            Box::new(graph::DepthFirstSearch::new(g, p.start)?)
        }
        AlgorithmId::BreadthFirstSearch => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(false, graph::traversal_demo)?;
            Box::new(graph::BreadthFirstSearch::new(g, p.start)?)
        }
        AlgorithmId::Dijkstra => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(false, graph::dijkstra_demo)?;
            Box::new(graph::Dijkstra::new(g, p.start)?)
        }
        AlgorithmId::BellmanFord => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(true, graph::bellman_ford_demo)?;
            Box::new(graph::BellmanFord::new(g, p.start)?)
        }
        AlgorithmId::FloydWarshall => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(true, graph::floyd_warshall_demo)?;
            Box::new(graph::FloydWarshall::new(g))
        }
        AlgorithmId::Kruskal => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(false, graph::mst_demo)?;
            Box::new(graph::Kruskal::new(g)?)
        }
        AlgorithmId::Prim => {
            let p: GraphParams = params(&request.params)?;
            let g = p.graph_or(false, graph::mst_demo)?;
            Box::new(graph::Prim::new(g, p.start)?)
        }
        AlgorithmId::TopologicalSort => {
            let p: TopologicalParams = params(&request.params)?;
            let g = match p.graph {
                Some(input) => input.build(true)?,
                None => graph::dag_demo(),
            };
            Box::new(graph::TopologicalSort::new(g, p.variant)?)
        }
        AlgorithmId::Fibonacci => {
            let p: FibonacciParams = params(&request.params)?;
            Box::new(dp::Fibonacci::new(p.n, p.mode)?)
        }
        AlgorithmId::Knapsack => {
            let p: KnapsackParams = params(&request.params)?;
            Box::new(dp::Knapsack::new(p.weights, p.values, p.capacity)?)
        }
        AlgorithmId::LongestCommonSubsequence => {
            let p: LcsParams = params(&request.params)?;
            Box::new(dp::LongestCommonSubsequence::new(p.first, p.second))
        }
        AlgorithmId::LongestIncreasingSubsequence => {
            let input = request
                .input
                .clone()
                .unwrap_or_else(|| dp::lis::DEMO_ARRAY.to_vec());
            Box::new(dp::LongestIncreasingSubsequence::new(input))
        }
        AlgorithmId::EditDistance => {
            let p: EditDistanceParams = params(&request.params)?;
            Box::new(dp::EditDistance::new(p.source, p.target))
        }
        AlgorithmId::CoinChange => {
            let p: CoinChangeParams = params(&request.params)?;
            Box::new(dp::CoinChange::new(p.coins, p.amount)?)
        }
        AlgorithmId::MatrixChainMultiplication => {
            let p: MatrixChainParams = params(&request.params)?;
            Box::new(dp::MatrixChainMultiplication::new(p.dimensions)?)
        }
        AlgorithmId::PalindromePartitioning => {
            let p: PalindromeParams = params(&request.params)?;
            Box::new(dp::PalindromePartitioning::new(p.text))
        }
    };
    Ok(generator)
}

/// Builds and runs the generator for `id`.
pub fn generate(id: AlgorithmId, request: &TraceRequest) -> Result<TraceBundle, EngineError> {
    build(id, request)?.generate_bundle()
}

fn search_input(id: AlgorithmId, request: &TraceRequest) -> Result<(Vec<i64>, i64), EngineError> {
    match (&request.input, request.target) {
        (Some(input), Some(target)) => Ok((input.clone(), target)),
        (Some(_), None) => Err(EngineError::MissingInput {
            algorithm: id,
            field: "target",
        }),
        (None, target) => Ok((DEMO_ARRAY.to_vec(), target.unwrap_or(DEMO_TARGET))),
    }
}

/// Deserializes a parameter struct, treating `null` as "all defaults".
fn params<P: DeserializeOwned + Default>(value: &serde_json::Value) -> Result<P, EngineError> {
    if value.is_null() {
        return Ok(P::default());
    }
    Ok(P::deserialize(value)?)
}

/// A caller-supplied graph, as an edge list or an adjacency matrix.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum GraphInput {
    Edges {
        vertices: usize,
        directed: Option<bool>,
        edges: Vec<(usize, usize, i64)>,
    },
    Matrix {
        matrix: Vec<Vec<i64>>,
        directed: Option<bool>,
    },
}

impl GraphInput {
    /// `directed` applies when the input leaves it out.
    fn build(self, directed: bool) -> Result<DemoGraph, EngineError> {
        let graph = match self {
            GraphInput::Edges {
                vertices,
                directed: d,
                edges,
            } => DemoGraph::from_edges(vertices, d.unwrap_or(directed), edges)?,
            GraphInput::Matrix {
                matrix,
                directed: d,
            } => DemoGraph::from_matrix(&matrix, d.unwrap_or(directed))?,
        };
        Ok(graph)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GraphParams {
    graph: Option<GraphInput>,
    /// Start or source vertex. Ignored by Floyd-Warshall and Kruskal.
    start: usize,
}

impl GraphParams {
    fn graph_or(&self, directed: bool, demo: fn() -> DemoGraph) -> Result<DemoGraph, EngineError> {
        match &self.graph {
            Some(input) => input.clone().build(directed),
            None => Ok(demo()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TopologicalParams {
    graph: Option<GraphInput>,
    variant: TopologicalVariant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FibonacciParams {
    n: usize,
    mode: FibonacciMode,
}

impl Default for FibonacciParams {
    fn default() -> Self {
        FibonacciParams {
            n: dp::fibonacci::DEMO_N,
            mode: FibonacciMode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KnapsackParams {
    weights: Vec<usize>,
    values: Vec<i64>,
    capacity: usize,
}

impl Default for KnapsackParams {
    fn default() -> Self {
        KnapsackParams {
            weights: dp::knapsack::DEMO_WEIGHTS.to_vec(),
            values: dp::knapsack::DEMO_VALUES.to_vec(),
            capacity: dp::knapsack::DEMO_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LcsParams {
    first: String,
    second: String,
}

impl Default for LcsParams {
    fn default() -> Self {
        LcsParams {
            first: dp::lcs::DEMO_FIRST.to_string(),
            second: dp::lcs::DEMO_SECOND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EditDistanceParams {
    source: String,
    target: String,
}

impl Default for EditDistanceParams {
    fn default() -> Self {
        EditDistanceParams {
            source: dp::edit_distance::DEMO_SOURCE.to_string(),
            target: dp::edit_distance::DEMO_TARGET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CoinChangeParams {
    coins: Vec<usize>,
    amount: usize,
}

impl Default for CoinChangeParams {
    fn default() -> Self {
        CoinChangeParams {
            coins: dp::coin_change::DEMO_COINS.to_vec(),
            amount: dp::coin_change::DEMO_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MatrixChainParams {
    /// `[rows, cols]` per matrix.
    dimensions: Vec<(u64, u64)>,
}

impl Default for MatrixChainParams {
    fn default() -> Self {
        MatrixChainParams {
            dimensions: dp::matrix_chain::DEMO_DIMENSIONS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PalindromeParams {
    text: String,
}

impl Default for PalindromeParams {
    fn default() -> Self {
        PalindromeParams {
            text: dp::palindrome::DEMO_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{CoreError, Outcome, StepKind};
    use serde_json::json;

    fn last_data(bundle: &TraceBundle) -> &serde_json::Value {
        &bundle.steps.last().unwrap().data
    }

    #[test]
    fn every_algorithm_builds_with_defaults() {
        for id in AlgorithmId::ALL {
            let bundle = generate(id, &TraceRequest::default()).unwrap();
            assert_eq!(bundle.info.id, id);
            assert_eq!(bundle.steps[0].kind, StepKind::Init);
            assert!(bundle.steps.last().unwrap().completed, "{}", id);
        }
    }

    #[test]
    fn catalogue_matches_ids() {
        let ids: Vec<AlgorithmId> = catalogue().iter().map(|i| i.id).collect();
        assert_eq!(ids, AlgorithmId::ALL.to_vec());
    }

    #[test]
    fn sorting_uses_request_input() {
        let request = TraceRequest::with_input(vec![5, 3, 8, 1]);
        let bundle = generate(AlgorithmId::BubbleSort, &request).unwrap();
        assert_eq!(last_data(&bundle)["array"], json!([1, 3, 5, 8]));
    }

    #[test]
    fn search_with_input_needs_target() {
        let request = TraceRequest::with_input(vec![1, 2, 3]);
        let err = build(AlgorithmId::BinarySearch, &request).err().unwrap();
        assert!(matches!(err, EngineError::MissingInput { field: "target", .. }));

        let bundle = generate(AlgorithmId::BinarySearch, &request.with_target(3)).unwrap();
        assert_eq!(
            bundle.steps.last().unwrap().kind.outcome(),
            Some(Outcome::Found { index: 2 })
        );
    }

    #[test]
    fn params_override_defaults() {
        let request = TraceRequest::default().with_params(json!({"coins": [2], "amount": 3}));
        let bundle = generate(AlgorithmId::CoinChange, &request).unwrap();
        assert_eq!(last_data(&bundle)["result"], json!(-1));

        let request = TraceRequest::default().with_params(json!({"n": 12, "mode": "memoized"}));
        let bundle = generate(AlgorithmId::Fibonacci, &request).unwrap();
        assert_eq!(last_data(&bundle)["result"], json!(144));
    }

    #[test]
    fn custom_graph_as_edges_or_matrix() {
        let request = TraceRequest::default().with_params(json!({
            "graph": {"vertices": 3, "edges": [[0, 1, 2], [1, 2, 2], [0, 2, 5]]},
            "start": 0
        }));
        let bundle = generate(AlgorithmId::Dijkstra, &request).unwrap();
        assert_eq!(last_data(&bundle)["distances"], json!([0, 2, 4]));

        let request = TraceRequest::default().with_params(json!({
            "graph": {"matrix": [[0, 1], [1, 0]]}
        }));
        let bundle = generate(AlgorithmId::Kruskal, &request).unwrap();
        assert_eq!(last_data(&bundle)["total_weight"], json!(1));
    }

    #[test]
    fn bad_params_are_rejected() {
        let request = TraceRequest::default().with_params(json!({"capacity": "seven"}));
        assert!(matches!(
            build(AlgorithmId::Knapsack, &request).err().unwrap(),
            EngineError::InvalidParams(_)
        ));

        let request = TraceRequest::default().with_params(json!({"bogus": 1}));
        assert!(build(AlgorithmId::LongestCommonSubsequence, &request).is_err());

        let request = TraceRequest::default().with_params(json!({"start": 9}));
        assert!(matches!(
            build(AlgorithmId::BreadthFirstSearch, &request).err().unwrap(),
            EngineError::Core(CoreError::VertexOutOfRange { vertex: 9, .. })
        ));
    }

    #[test]
    fn request_deserializes_with_missing_fields() {
        let request: TraceRequest = serde_json::from_value(json!({"input": [3, 1]})).unwrap();
        assert_eq!(request.input, Some(vec![3, 1]));
        assert!(request.params.is_null());
    }
}
