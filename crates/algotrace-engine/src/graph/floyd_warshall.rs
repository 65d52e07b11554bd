//! Floyd-Warshall all-pairs shortest paths.
//!
//! Loops over intermediate vertex `k`, then `i`, then `j`. Each triple
//! records a `Compare` step followed by an `Update` step whose `changed` flag
//! says whether the path through `k` was shorter. This is the densest trace
//! in the catalogue: `2 * V³` steps between `Init` and `Complete`.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, DemoGraph, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::{floyd_warshall_demo, fmt_distance};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::FloydWarshall,
    name: "Floyd-Warshall",
    category: Category::Graph,
    description: "Computes shortest paths between every pair of vertices by allowing each \
                  vertex in turn as an intermediate stop and keeping any shorter route.",
    time_complexity: "O(V^3)",
    space_complexity: "O(V^2)",
    difficulty: Difficulty::Hard,
    reference_code: "\
dist[i][j] = w(i, j), dist[i][i] = 0, inf otherwise
for k in 0..V:
    for i in 0..V:
        for j in 0..V:
            if dist[i][k] + dist[k][j] < dist[i][j]:
                dist[i][j] = dist[i][k] + dist[k][j]",
};

/// Payload: the distance matrix plus the triple under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrixState {
    /// `None` = no known path.
    pub distances: Vec<Vec<Option<i64>>>,
    pub k: Option<usize>,
    pub i: Option<usize>,
    pub j: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloydWarshall {
    graph: DemoGraph,
}

impl FloydWarshall {
    pub fn new(graph: DemoGraph) -> Self {
        FloydWarshall { graph }
    }
}

impl Default for FloydWarshall {
    fn default() -> Self {
        FloydWarshall::new(floyd_warshall_demo())
    }
}

fn initial_matrix(graph: &DemoGraph) -> Vec<Vec<Option<i64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for arc in graph.arcs() {
        let slot = &mut dist[arc.from][arc.to];
        if slot.map_or(true, |d| arc.weight < d) {
            *slot = Some(arc.weight);
        }
    }
    dist
}

impl TraceGenerator for FloydWarshall {
    type State = DistanceMatrixState;

    fn generate_steps(&self) -> Trace<DistanceMatrixState> {
        let n = self.graph.vertex_count();
        let mut rec = TraceRecorder::new();
        let mut state = DistanceMatrixState {
            distances: initial_matrix(&self.graph),
            k: None,
            i: None,
            j: None,
        };
        rec.record(
            StepKind::Init,
            "Distance matrix initialised from edge weights",
            state.clone(),
        );

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    state.k = Some(k);
                    state.i = Some(i);
                    state.j = Some(j);
                    let via = match (state.distances[i][k], state.distances[k][j]) {
                        (Some(a), Some(b)) => Some(a.saturating_add(b)),
                        _ => None,
                    };
                    rec.record_with(
                        StepKind::Compare,
                        format!(
                            "k={}: dist[{}][{}] = {} vs dist[{}][{}] + dist[{}][{}] = {}",
                            k,
                            i,
                            j,
                            fmt_distance(state.distances[i][j]),
                            i,
                            k,
                            k,
                            j,
                            fmt_distance(via)
                        ),
                        state.clone(),
                        vec![i, j, k],
                    );

                    let improved = match (via, state.distances[i][j]) {
                        (Some(c), Some(d)) => c < d,
                        (Some(_), None) => true,
                        (None, _) => false,
                    };
                    let description = if improved {
                        state.distances[i][j] = via;
                        format!("Shorter path {} -> {} via {}: {}", i, j, k, fmt_distance(via))
                    } else {
                        format!("Keep dist[{}][{}] = {}", i, j, fmt_distance(state.distances[i][j]))
                    };
                    rec.record_with(
                        StepKind::Update { changed: improved },
                        description,
                        state.clone(),
                        vec![i, j],
                    );
                }
            }
        }

        state.k = None;
        state.i = None;
        state.j = None;
        let negative = (0..n).find(|&v| state.distances[v][v].is_some_and(|d| d < 0));
        match negative {
            Some(v) => rec.complete(
                Outcome::NegativeCycle,
                format!("dist[{}][{}] is negative: the graph has a negative cycle", v, v),
                state,
            ),
            None => rec.complete(Outcome::Solved, "All-pairs shortest distances computed", state),
        }
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_matrix() {
        let trace = FloydWarshall::default().generate_steps();
        let last = trace.last().unwrap();
        let inf = None;
        assert_eq!(
            last.data.distances,
            vec![
                vec![Some(0), Some(5), Some(8), Some(9)],
                vec![inf, Some(0), Some(3), Some(4)],
                vec![inf, inf, Some(0), Some(1)],
                vec![inf, inf, inf, Some(0)],
            ]
        );
    }

    #[test]
    fn two_steps_per_triple() {
        let trace = FloydWarshall::default().generate_steps();
        assert_eq!(trace.len(), 2 * 4 * 4 * 4 + 2);
        let compares = trace.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 64);
    }

    #[test]
    fn loop_order_is_k_then_i_then_j() {
        let trace = FloydWarshall::default().generate_steps();
        let triples: Vec<(usize, usize, usize)> = trace
            .iter()
            .filter(|s| s.kind == StepKind::Compare)
            .map(|s| (s.data.k.unwrap(), s.data.i.unwrap(), s.data.j.unwrap()))
            .collect();
        assert_eq!(triples[0], (0, 0, 0));
        assert_eq!(triples[1], (0, 0, 1));
        assert_eq!(triples[4], (0, 1, 0));
        assert_eq!(triples[16], (1, 0, 0));
    }

    #[test]
    fn negative_cycle_is_flagged() {
        let graph = DemoGraph::from_edges(2, true, [(0, 1, 1), (1, 0, -3)]).unwrap();
        let trace = FloydWarshall::new(graph).generate_steps();
        assert_eq!(
            trace.last().unwrap().kind.outcome(),
            Some(Outcome::NegativeCycle)
        );
    }
}
