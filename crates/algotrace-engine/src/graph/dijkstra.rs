//! Dijkstra's algorithm, array-based O(V²) variant.
//!
//! Each round linearly scans the unsettled vertices for the smallest finite
//! tentative distance; the first minimum in index order wins. Every
//! relaxation attempt is a `Compare` step, and an improvement adds an
//! `Update { changed: true }` step. Weights must be non-negative.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};

use super::{dijkstra_demo, fmt_distance, DistanceState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Dijkstra,
    name: "Dijkstra's Shortest Path",
    category: Category::Graph,
    description: "Grows a set of vertices with final shortest distances, always settling the \
                  unsettled vertex with the smallest tentative distance and relaxing its edges.",
    time_complexity: "O(V^2)",
    space_complexity: "O(V)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dist = [inf; V]; dist[source] = 0
repeat V times:
    u = unsettled vertex with minimum finite dist (linear scan)
    settle u
    for v in neighbors(u) not settled:
        if dist[u] + w(u, v) < dist[v]: dist[v] = dist[u] + w(u, v)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dijkstra {
    graph: DemoGraph,
    source: usize,
}

impl Dijkstra {
    /// Rejects an out-of-range source and negative edge weights.
    pub fn new(graph: DemoGraph, source: usize) -> Result<Self, CoreError> {
        graph.check_vertex(source)?;
        if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0) {
            return Err(CoreError::InvalidGraph {
                reason: format!(
                    "Dijkstra requires non-negative weights, edge {}->{} has {}",
                    edge.from, edge.to, edge.weight
                ),
            });
        }
        Ok(Dijkstra { graph, source })
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra {
            graph: dijkstra_demo(),
            source: 0,
        }
    }
}

impl TraceGenerator for Dijkstra {
    type State = DistanceState;

    fn generate_steps(&self) -> Trace<DistanceState> {
        let n = self.graph.vertex_count();
        let matrix = self.graph.adjacency_matrix();
        let mut rec = TraceRecorder::new();
        let mut state = DistanceState::new(&self.graph, self.source);
        let mut settled = vec![false; n];

        rec.record(
            StepKind::Init,
            format!("Distance to source {} is 0, all others ∞", self.source),
            state.clone(),
        );

        for _ in 0..n {
            let mut selected: Option<(usize, i64)> = None;
            for v in 0..n {
                if settled[v] {
                    continue;
                }
                if let Some(d) = state.distances[v] {
                    if selected.map_or(true, |(_, best)| d < best) {
                        selected = Some((v, d));
                    }
                }
            }
            let Some((u, dist_u)) = selected else {
                break;
            };

            settled[u] = true;
            state.settled.push(u);
            state.current = Some(u);
            state.edge = None;
            rec.record(
                StepKind::Visit,
                format!("Selected node {} with smallest distance {}", u, dist_u),
                state.clone(),
            );

            for v in 0..n {
                let weight = matrix[u][v];
                if weight == 0 || settled[v] {
                    continue;
                }
                let candidate = dist_u.saturating_add(weight);
                state.edge = Some((u, v));
                rec.record_with(
                    StepKind::Compare,
                    format!(
                        "Relax {}->{}: {} + {} = {} vs current {}",
                        u,
                        v,
                        dist_u,
                        weight,
                        candidate,
                        fmt_distance(state.distances[v])
                    ),
                    state.clone(),
                    vec![u, v],
                );
                if state.distances[v].map_or(true, |d| candidate < d) {
                    state.distances[v] = Some(candidate);
                    state.previous[v] = Some(u);
                    rec.record_with(
                        StepKind::Update { changed: true },
                        format!("Improved distance to {}: {}", v, candidate),
                        state.clone(),
                        vec![v],
                    );
                }
            }
        }

        state.current = None;
        state.edge = None;
        let summary: Vec<String> = state
            .distances
            .iter()
            .enumerate()
            .map(|(v, d)| format!("{}: {}", v, fmt_distance(*d)))
            .collect();
        rec.complete(
            Outcome::Solved,
            format!("Shortest distances from {}: {}", self.source, summary.join(", ")),
            state,
        );
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
