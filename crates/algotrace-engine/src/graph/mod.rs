//! Graph trace generators.
//!
//! Each generator owns a [`DemoGraph`] (a bundled demonstration graph unless
//! the caller supplies one) and a start vertex where relevant. Payloads are
//! per-family structs defined here so the player can share renderers:
//! [`TraversalState`] for DFS/BFS, [`DistanceState`] for single-source
//! shortest paths, [`MstState`] for spanning trees. Floyd-Warshall and
//! topological sort carry their own payloads.
//!
//! Infinite distances are `None`.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod topological;

pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use topological::{TopologicalSort, TopologicalVariant};

use algotrace_core::{DemoGraph, WeightedEdge};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Payload for DFS and BFS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalState {
    /// Adjacency matrix, `0` = no edge.
    pub graph: Vec<Vec<i64>>,
    /// Visited vertices in discovery order.
    pub visited: IndexSet<usize>,
    /// DFS: active recursion stack, bottom first. BFS: queue, front first.
    pub frontier: Vec<usize>,
    pub current: Option<usize>,
    /// Neighbor being discovered from `current`.
    pub neighbor: Option<usize>,
    /// DFS: post-order finish sequence. BFS: processing order.
    pub finished: Vec<usize>,
}

impl TraversalState {
    pub(crate) fn new(graph: &DemoGraph) -> Self {
        TraversalState {
            graph: graph.adjacency_matrix(),
            visited: IndexSet::new(),
            frontier: Vec::new(),
            current: None,
            neighbor: None,
            finished: Vec::new(),
        }
    }
}

/// Payload for Dijkstra and Bellman-Ford.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceState {
    pub vertex_count: usize,
    pub edges: Vec<WeightedEdge>,
    pub source: usize,
    /// Tentative distance per vertex, `None` = infinity.
    pub distances: Vec<Option<i64>>,
    /// Predecessor on the best known path.
    pub previous: Vec<Option<usize>>,
    /// Vertices whose distance is final (Dijkstra only).
    pub settled: Vec<usize>,
    pub current: Option<usize>,
    /// Edge under relaxation as `(from, to)`.
    pub edge: Option<(usize, usize)>,
    /// Relaxation round (Bellman-Ford only), 1-based.
    pub round: usize,
}

impl DistanceState {
    pub(crate) fn new(graph: &DemoGraph, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut distances = vec![None; n];
        distances[source] = Some(0);
        DistanceState {
            vertex_count: n,
            edges: graph.edges().to_vec(),
            source,
            distances,
            previous: vec![None; n],
            settled: Vec::new(),
            current: None,
            edge: None,
            round: 0,
        }
    }
}

/// Payload for Kruskal and Prim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstState {
    pub vertex_count: usize,
    /// Candidate edges. Kruskal shows them in processing order once sorted.
    pub edges: Vec<WeightedEdge>,
    /// Edges accepted into the tree so far.
    pub tree: Vec<WeightedEdge>,
    /// Edge being considered.
    pub candidate: Option<WeightedEdge>,
    /// Prim: vertices in the tree, in insertion order.
    pub in_tree: Vec<usize>,
    /// Kruskal: union-find representative per vertex.
    pub components: Vec<usize>,
    pub total_weight: i64,
}

impl MstState {
    pub(crate) fn new(graph: &DemoGraph) -> Self {
        let n = graph.vertex_count();
        MstState {
            vertex_count: n,
            edges: graph.edges().to_vec(),
            tree: Vec::new(),
            candidate: None,
            in_tree: Vec::new(),
            components: (0..n).collect(),
            total_weight: 0,
        }
    }
}

/// Renders a tentative distance, `∞` for unreachable.
pub(crate) fn fmt_distance(distance: Option<i64>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "∞".to_string(),
    }
}

fn demo(vertex_count: usize, directed: bool, edges: &[(usize, usize, i64)]) -> DemoGraph {
    DemoGraph::from_edges(vertex_count, directed, edges.iter().copied())
        .expect("bundled demonstration edges are in range")
}

/// Undirected, unweighted 6-vertex graph used by DFS and BFS.
pub fn traversal_demo() -> DemoGraph {
    demo(
        6,
        false,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 4, 1), (3, 5, 1), (4, 5, 1)],
    )
}

/// Undirected weighted 6-vertex graph used by Dijkstra.
pub fn dijkstra_demo() -> DemoGraph {
    demo(
        6,
        false,
        &[(0, 1, 4), (0, 2, 2), (1, 2, 5), (1, 3, 10), (2, 4, 3), (4, 3, 4), (3, 5, 11)],
    )
}

/// Directed 5-vertex graph with negative edges but no negative cycle.
pub fn bellman_ford_demo() -> DemoGraph {
    demo(
        5,
        true,
        &[
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
        ],
    )
}

/// Directed 4-vertex graph used by Floyd-Warshall.
pub fn floyd_warshall_demo() -> DemoGraph {
    demo(4, true, &[(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)])
}

/// Undirected weighted 5-vertex graph shared by Kruskal and Prim.
pub fn mst_demo() -> DemoGraph {
    demo(
        5,
        false,
        &[
            (0, 1, 2),
            (0, 3, 6),
            (1, 2, 3),
            (1, 3, 8),
            (1, 4, 5),
            (2, 4, 7),
            (3, 4, 9),
        ],
    )
}

/// Directed acyclic 6-vertex graph used by topological sort.
pub fn dag_demo() -> DemoGraph {
    demo(
        6,
        true,
        &[(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)],
    )
}
