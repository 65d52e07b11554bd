//! Prim's minimum spanning tree, array-based O(V³) scan.
//!
//! One tree grows from `start`. Each round scans every (tree vertex, outside
//! neighbor) pair, tree vertices in insertion order and neighbors ascending,
//! and takes the first pair with the globally smallest weight. The trace has
//! exactly one `Visit` step per vertex added.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder, WeightedEdge,
};

use super::{mst_demo, MstState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Prim,
    name: "Prim's MST",
    category: Category::Graph,
    description: "Grows a minimum spanning tree from a start vertex, repeatedly adding the \
                  cheapest edge that connects the tree to a vertex outside it.",
    time_complexity: "O(V^3)",
    space_complexity: "O(V)",
    difficulty: Difficulty::Medium,
    reference_code: "\
tree = {start}
while tree.len() < V:
    (u, v) = cheapest edge with u in tree, v not in tree
    if none: break
    tree.add(v); mst.push((u, v))",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prim {
    graph: DemoGraph,
    start: usize,
}

impl Prim {
    /// Rejects directed graphs and an out-of-range start.
    pub fn new(graph: DemoGraph, start: usize) -> Result<Self, CoreError> {
        if graph.is_directed() {
            return Err(CoreError::InvalidGraph {
                reason: "minimum spanning trees need an undirected graph".to_string(),
            });
        }
        graph.check_vertex(start)?;
        Ok(Prim { graph, start })
    }
}

impl Default for Prim {
    fn default() -> Self {
        Prim {
            graph: mst_demo(),
            start: 0,
        }
    }
}

impl TraceGenerator for Prim {
    type State = MstState;

    fn generate_steps(&self) -> Trace<MstState> {
        let n = self.graph.vertex_count();
        let matrix = self.graph.adjacency_matrix();
        let mut rec = TraceRecorder::new();
        let mut state = MstState::new(&self.graph);
        let mut in_tree = vec![false; n];

        rec.record(
            StepKind::Init,
            format!("Growing a tree from vertex {}", self.start),
            state.clone(),
        );

        in_tree[self.start] = true;
        state.in_tree.push(self.start);
        rec.record_with(
            StepKind::Visit,
            format!("Start the tree at vertex {}", self.start),
            state.clone(),
            vec![self.start],
        );

        while state.in_tree.len() < n {
            let mut best: Option<WeightedEdge> = None;
            for &u in &state.in_tree {
                for v in 0..n {
                    let weight = matrix[u][v];
                    if weight == 0 || in_tree[v] {
                        continue;
                    }
                    if best.map_or(true, |b| weight < b.weight) {
                        best = Some(WeightedEdge::new(u, v, weight));
                    }
                }
            }
            let Some(edge) = best else {
                break;
            };

            in_tree[edge.to] = true;
            state.in_tree.push(edge.to);
            state.tree.push(edge);
            state.total_weight += edge.weight;
            state.candidate = Some(edge);
            rec.record_with(
                StepKind::Visit,
                format!(
                    "Add vertex {} via edge {}-{} (weight {}), tree weight {}",
                    edge.to, edge.from, edge.to, edge.weight, state.total_weight
                ),
                state.clone(),
                vec![edge.from, edge.to],
            );
        }

        state.candidate = None;
        if state.in_tree.len() < n {
            let description = format!(
                "Only {} of {} vertices reachable from {}",
                state.in_tree.len(),
                n,
                self.start
            );
            rec.complete(Outcome::Unreachable, description, state);
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

    #[test]
    fn demo_tree_weight_and_order() {
        let trace = Prim::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.total_weight, 16);
        assert_eq!(last.data.in_tree, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn one_visit_per_vertex() {
        let trace = Prim::default().generate_steps();
        let visits = trace.iter().filter(|s| s.kind == StepKind::Visit).count();
        assert_eq!(visits, 5);
        assert_eq!(trace.len(), 7);
    }

    #[test]
    fn ties_go_to_earliest_tree_vertex() {
        // 0-2 and 1-2 both weigh 1; 0 joined first so 0-2 wins.
        let graph = DemoGraph::from_edges(3, false, [(0, 1, 5), (1, 2, 1), (0, 2, 1)]).unwrap();
        let trace = Prim::new(graph, 0).unwrap().generate_steps();
        let tree = &trace.last().unwrap().data.tree;
        assert_eq!(tree[0], WeightedEdge::new(0, 2, 1));
        assert_eq!(tree[1], WeightedEdge::new(2, 1, 1));
    }

    #[test]
    fn parallel_edges_use_the_lightest() {
        let graph = DemoGraph::from_edges(2, false, [(0, 1, 1), (0, 1, 5)]).unwrap();
        let trace = Prim::new(graph, 0).unwrap().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.total_weight, 1);
        assert_eq!(last.data.tree, vec![WeightedEdge::new(0, 1, 1)]);
    }

    #[test]
    fn disconnected_graph_is_unreachable() {
        let graph = DemoGraph::from_edges(3, false, [(0, 1, 1)]).unwrap();
        let trace = Prim::new(graph, 0).unwrap().generate_steps();
        assert_eq!(
            trace.last().unwrap().kind.outcome(),
            Some(Outcome::Unreachable)
        );
    }
}
