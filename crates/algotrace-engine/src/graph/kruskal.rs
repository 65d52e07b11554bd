//! Kruskal's minimum spanning tree.
//!
//! Edges are stably sorted by weight and scanned in that order. Each edge
//! records a `Compare` step (checking its endpoints' components) followed by
//! a `Decide` step that accepts or rejects it. The scan stops once the tree
//! holds `V - 1` edges.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, Decision, DemoGraph, Difficulty, Outcome,
    StepKind, Trace, TraceGenerator, TraceRecorder,
};

use super::{mst_demo, MstState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Kruskal,
    name: "Kruskal's MST",
    category: Category::Graph,
    description: "Builds a minimum spanning tree by scanning edges from lightest to heaviest \
                  and keeping each edge that joins two different components.",
    time_complexity: "O(E log E)",
    space_complexity: "O(V)",
    difficulty: Difficulty::Medium,
    reference_code: "\
sort edges by weight
for (u, v, w) in edges:
    if find(u) != find(v):
        union(u, v); tree.push((u, v, w))
    if tree.len() == V - 1: break",
};

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if already joined.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// Representative of every element.
    pub(crate) fn representatives(&mut self) -> Vec<usize> {
        (0..self.parent.len()).map(|x| self.find(x)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kruskal {
    graph: DemoGraph,
}

impl Kruskal {
    /// Rejects directed graphs.
    pub fn new(graph: DemoGraph) -> Result<Self, CoreError> {
        if graph.is_directed() {
            return Err(CoreError::InvalidGraph {
                reason: "minimum spanning trees need an undirected graph".to_string(),
            });
        }
        Ok(Kruskal { graph })
    }
}

impl Default for Kruskal {
    fn default() -> Self {
        Kruskal { graph: mst_demo() }
    }
}

impl TraceGenerator for Kruskal {
    type State = MstState;

    fn generate_steps(&self) -> Trace<MstState> {
        let n = self.graph.vertex_count();
        let mut rec = TraceRecorder::new();
        let mut state = MstState::new(&self.graph);
        rec.record(
            StepKind::Init,
            format!("{} vertices, {} edges, every vertex its own component", n, state.edges.len()),
            state.clone(),
        );

        state.edges.sort_by_key(|e| e.weight);
        rec.record(
            StepKind::Update { changed: true },
            "Sorted edges by weight",
            state.clone(),
        );

        let mut sets = DisjointSet::new(n);
        let edges = state.edges.clone();
        for (position, edge) in edges.iter().enumerate() {
            if state.tree.len() + 1 >= n {
                break;
            }
            state.candidate = Some(*edge);
            let (ru, rv) = (sets.find(edge.from), sets.find(edge.to));
            rec.record_with(
                StepKind::Compare,
                format!(
                    "Edge {}-{} (weight {}): components {} and {}",
                    edge.from, edge.to, edge.weight, ru, rv
                ),
                state.clone(),
                vec![position],
            );

            if sets.union(edge.from, edge.to) {
                state.tree.push(*edge);
                state.total_weight += edge.weight;
                state.components = sets.representatives();
                rec.record_with(
                    StepKind::Decide {
                        decision: Decision::Accept,
                    },
                    format!(
                        "Accept {}-{}, tree weight now {}",
                        edge.from, edge.to, state.total_weight
                    ),
                    state.clone(),
                    vec![position],
                );
            } else {
                rec.record_with(
                    StepKind::Decide {
                        decision: Decision::Reject,
                    },
                    format!("Reject {}-{}: it would form a cycle", edge.from, edge.to),
                    state.clone(),
                    vec![position],
                );
            }
        }

        state.candidate = None;
        if n > 0 && state.tree.len() + 1 < n {
            rec.complete(
                Outcome::Unreachable,
                format!(
                    "Graph is disconnected: spanning forest of {} edges, weight {}",
                    state.tree.len(),
                    state.total_weight
                ),
                state,
            );
        } else {
            let description = format!("Minimum spanning tree weight {}", state.total_weight);
            rec.complete(Outcome::Solved, description, state);
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
    use algotrace_core::WeightedEdge;

    #[test]
    fn demo_tree_weight() {
        let trace = Kruskal::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::Solved));
        assert_eq!(last.data.total_weight, 16);
        assert_eq!(
            last.data.tree,
            vec![
                WeightedEdge::new(0, 1, 2),
                WeightedEdge::new(1, 2, 3),
                WeightedEdge::new(1, 4, 5),
                WeightedEdge::new(0, 3, 6),
            ]
        );
    }

    #[test]
    fn second_step_shows_sorted_edges() {
        let trace = Kruskal::default().generate_steps();
        assert_eq!(trace[1].kind, StepKind::Update { changed: true });
        let weights: Vec<i64> = trace[1].data.edges.iter().map(|e| e.weight).collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(trace[0].data.edges, mst_demo().edges());
    }

    #[test]
    fn every_compare_is_followed_by_a_decision() {
        let trace = Kruskal::default().generate_steps();
        for (i, step) in trace.iter().enumerate() {
            if step.kind == StepKind::Compare {
                assert!(matches!(trace[i + 1].kind, StepKind::Decide { .. }));
            }
        }
    }

    #[test]
    fn stops_after_v_minus_one_edges() {
        let trace = Kruskal::default().generate_steps();
        let considered = trace.iter().filter(|s| s.kind == StepKind::Compare).count();
        // 2, 3, 5 accepted; 6 accepted as the fourth edge; 7, 8, 9 never looked at.
        assert_eq!(considered, 4);
    }

    #[test]
    fn disconnected_graph_is_unreachable() {
        let graph = DemoGraph::from_edges(4, false, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let trace = Kruskal::new(graph).unwrap().generate_steps();
        assert_eq!(
            trace.last().unwrap().kind.outcome(),
            Some(Outcome::Unreachable)
        );
    }

    #[test]
    fn directed_graph_is_rejected() {
        let graph = DemoGraph::from_edges(2, true, [(0, 1, 1)]).unwrap();
        assert!(Kruskal::new(graph).is_err());
    }

    #[test]
    fn disjoint_set_unions() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        let reps = sets.representatives();
        assert!(reps.iter().all(|&r| r == reps[0]));
    }
}
