//! Bellman-Ford single-source shortest paths.
//!
//! Runs up to `V-1` rounds over the edge list in input order, stopping early
//! after a round in which no edge relaxed. A final pass checks every edge
//! once more; if any still relaxes, the trace ends with
//! [`Outcome::NegativeCycle`] instead of distances.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};

use super::{bellman_ford_demo, fmt_distance, DistanceState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BellmanFord,
    name: "Bellman-Ford",
    category: Category::Graph,
    description: "Relaxes every edge V-1 times so shortest paths with up to V-1 edges are \
                  found even with negative weights, then checks once more to detect a \
                  reachable negative cycle.",
    time_complexity: "O(V * E)",
    space_complexity: "O(V)",
    difficulty: Difficulty::Hard,
    reference_code: "\
dist = [inf; V]; dist[source] = 0
repeat V-1 times:
    changed = false
    for (u, v, w) in edges:
        if dist[u] + w < dist[v]: dist[v] = dist[u] + w; changed = true
    if not changed: break
for (u, v, w) in edges:
    if dist[u] + w < dist[v]: report negative cycle",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellmanFord {
    graph: DemoGraph,
    source: usize,
}

impl BellmanFord {
    pub fn new(graph: DemoGraph, source: usize) -> Result<Self, CoreError> {
        graph.check_vertex(source)?;
        Ok(BellmanFord { graph, source })
    }
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord {
            graph: bellman_ford_demo(),
            source: 0,
        }
    }
}

/// Relaxation candidate for `dist[from] + weight`, `None` when `from` is
/// still unreachable.
fn candidate(state: &DistanceState, from: usize, weight: i64) -> Option<i64> {
    state.distances[from].map(|d| d.saturating_add(weight))
}

fn improves(state: &DistanceState, to: usize, candidate: Option<i64>) -> bool {
    match (candidate, state.distances[to]) {
        (Some(c), Some(d)) => c < d,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl TraceGenerator for BellmanFord {
    type State = DistanceState;

    fn generate_steps(&self) -> Trace<DistanceState> {
        let n = self.graph.vertex_count();
        let edges = self.graph.arcs();
        let mut rec = TraceRecorder::new();
        let mut state = DistanceState::new(&self.graph, self.source);

        rec.record(
            StepKind::Init,
            format!("Distance to source {} is 0, all others ∞", self.source),
            state.clone(),
        );

        for round in 1..n {
            state.round = round;
            let mut relaxed_any = false;
            for edge in &edges {
                let (u, v, w) = (edge.from, edge.to, edge.weight);
                let cand = candidate(&state, u, w);
                state.current = Some(u);
                state.edge = Some((u, v));
                let description = match cand {
                    Some(c) => format!(
                        "Round {}: edge {}->{} ({}): {} vs {}",
                        round,
                        u,
                        v,
                        w,
                        c,
                        fmt_distance(state.distances[v])
                    ),
                    None => format!("Round {}: edge {}->{} skipped, {} unreachable so far", round, u, v, u),
                };
                rec.record_with(StepKind::Compare, description, state.clone(), vec![u, v]);

                if improves(&state, v, cand) {
                    state.distances[v] = cand;
                    state.previous[v] = Some(u);
                    relaxed_any = true;
                    rec.record_with(
                        StepKind::Update { changed: true },
                        format!("Improved distance to {}: {}", v, fmt_distance(cand)),
                        state.clone(),
                        vec![v],
                    );
                }
            }
            if !relaxed_any {
                state.current = None;
                state.edge = None;
                rec.record(
                    StepKind::Finish,
                    format!("No edge relaxed in round {}, stopping early", round),
                    state.clone(),
                );
                break;
            }
        }

        // Negative-cycle check pass.
        for edge in &edges {
            let (u, v, w) = (edge.from, edge.to, edge.weight);
            let cand = candidate(&state, u, w);
            state.current = Some(u);
            state.edge = Some((u, v));
            rec.record_with(
                StepKind::Compare,
                format!("Cycle check: edge {}->{} ({})", u, v, w),
                state.clone(),
                vec![u, v],
            );
            if improves(&state, v, cand) {
                rec.complete(
                    Outcome::NegativeCycle,
                    format!("Edge {}->{} still relaxes: negative cycle reachable from {}", u, v, self.source),
                    state,
                );
                return rec.finish();
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
            format!("No negative cycle. Distances: {}", summary.join(", ")),
            state,
        );
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
