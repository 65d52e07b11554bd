//! Topological sort: DFS finish-stack (default) and Kahn's in-degree queue.
//!
//! A cycle is never an error. The DFS variant stops at the first back edge
//! and Kahn stops when the queue drains early; both end with
//! `Complete { CycleDetected }` and whatever partial order was built.

use std::collections::VecDeque;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::dag_demo;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::TopologicalSort,
    name: "Topological Sort",
    category: Category::Graph,
    description: "Orders the vertices of a directed acyclic graph so every edge points \
                  forward, by reversing DFS finish times or by repeatedly removing vertices \
                  with no remaining incoming edges.",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    difficulty: Difficulty::Medium,
    reference_code: "\
// depth-first
for v in vertices: if not visited: dfs(v)
dfs(v): visited.add(v); for w in out(v): if not visited: dfs(w)
        stack.push(v)
order = reverse(stack)

// Kahn
queue = vertices with in_degree 0
while queue: v = pop_front; order.push(v)
    for w in out(v): in_degree[w] -= 1; if in_degree[w] == 0: push_back(w)
cycle if order.len() < V",
};

/// Which topological sort to trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopologicalVariant {
    #[default]
    DepthFirst,
    Kahn,
}

/// Payload for both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologicalState {
    /// Adjacency matrix, `0` = no edge.
    pub graph: Vec<Vec<i64>>,
    pub visited: IndexSet<usize>,
    /// DFS: recursion stack, bottom first. Kahn: queue, front first.
    pub frontier: Vec<usize>,
    /// DFS: vertices in finish order (the stack). Kahn: empty.
    pub finished: Vec<usize>,
    /// Kahn: remaining in-degree per vertex. DFS: empty.
    pub in_degree: Vec<usize>,
    /// Topological order built so far. DFS fills it on completion.
    pub order: Vec<usize>,
    pub current: Option<usize>,
    pub neighbor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalSort {
    graph: DemoGraph,
    variant: TopologicalVariant,
}

impl TopologicalSort {
    /// Rejects undirected graphs.
    pub fn new(graph: DemoGraph, variant: TopologicalVariant) -> Result<Self, CoreError> {
        if !graph.is_directed() {
            return Err(CoreError::InvalidGraph {
                reason: "topological sort needs a directed graph".to_string(),
            });
        }
        Ok(TopologicalSort { graph, variant })
    }

    pub fn variant(&self) -> TopologicalVariant {
        self.variant
    }
}

impl Default for TopologicalSort {
    fn default() -> Self {
        TopologicalSort {
            graph: dag_demo(),
            variant: TopologicalVariant::DepthFirst,
        }
    }
}

impl TraceGenerator for TopologicalSort {
    type State = TopologicalState;

    fn generate_steps(&self) -> Trace<TopologicalState> {
        let state = TopologicalState {
            graph: self.graph.adjacency_matrix(),
            visited: IndexSet::new(),
            frontier: Vec::new(),
            finished: Vec::new(),
            in_degree: Vec::new(),
            order: Vec::new(),
            current: None,
            neighbor: None,
        };
        match self.variant {
            TopologicalVariant::DepthFirst => depth_first(state),
            TopologicalVariant::Kahn => kahn(state),
        }
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

fn out_neighbors(graph: &[Vec<i64>], v: usize) -> Vec<usize> {
    graph[v]
        .iter()
        .enumerate()
        .filter(|(_, &w)| w != 0)
        .map(|(to, _)| to)
        .collect()
}

struct DepthFirstRun {
    state: TopologicalState,
    rec: TraceRecorder<TopologicalState>,
}

impl DepthFirstRun {
    /// Returns the back edge `(from, to)` that closes a cycle, if any.
    fn visit(&mut self, v: usize) -> Option<(usize, usize)> {
        self.state.visited.insert(v);
        self.state.frontier.push(v);
        self.state.current = Some(v);
        self.state.neighbor = None;
        self.rec.record_with(
            StepKind::Visit,
            format!("Visit vertex {}", v),
            self.state.clone(),
            vec![v],
        );

        for w in out_neighbors(&self.state.graph, v) {
            if self.state.frontier.contains(&w) {
                return Some((v, w));
            }
            if self.state.visited.contains(&w) {
                continue;
            }
            self.state.current = Some(v);
            self.state.neighbor = Some(w);
            self.rec.record_with(
                StepKind::Discover,
                format!("Edge {} -> {}: descend into {}", v, w, w),
                self.state.clone(),
                vec![v, w],
            );
            if let Some(cycle) = self.visit(w) {
                return Some(cycle);
            }
        }

        self.state.frontier.pop();
        self.state.finished.push(v);
        self.state.current = Some(v);
        self.state.neighbor = None;
        self.rec.record_with(
            StepKind::Finish,
            format!("Vertex {} finished, pushed onto the stack", v),
            self.state.clone(),
            vec![v],
        );
        None
    }
}

fn depth_first(state: TopologicalState) -> Trace<TopologicalState> {
    let n = state.graph.len();
    let mut run = DepthFirstRun {
        state,
        rec: TraceRecorder::new(),
    };
    run.rec.record(
        StepKind::Init,
        "Depth-first topological sort, stack empty",
        run.state.clone(),
    );

    for v in 0..n {
        if run.state.visited.contains(&v) {
            continue;
        }
        if let Some((from, to)) = run.visit(v) {
            let mut state = run.state;
            state.current = Some(from);
            state.neighbor = Some(to);
            run.rec.complete(
                Outcome::CycleDetected,
                format!("Edge {} -> {} reaches a vertex still on the stack: cycle", from, to),
                state,
            );
            return run.rec.finish();
        }
    }

    let mut state = run.state;
    state.current = None;
    state.neighbor = None;
    state.order = state.finished.iter().rev().copied().collect();
    let description = format!("Topological order {:?}", state.order);
    run.rec.complete(Outcome::Solved, description, state);
    run.rec.finish()
}

fn kahn(mut state: TopologicalState) -> Trace<TopologicalState> {
    let n = state.graph.len();
    let mut rec = TraceRecorder::new();
    state.in_degree = (0..n)
        .map(|v| state.graph.iter().filter(|row| row[v] != 0).count())
        .collect();
    rec.record(
        StepKind::Init,
        format!("In-degrees {:?}", state.in_degree),
        state.clone(),
    );

    let mut queue = VecDeque::new();
    for v in 0..n {
        if state.in_degree[v] == 0 {
            queue.push_back(v);
            state.frontier = queue.iter().copied().collect();
            rec.record_with(
                StepKind::Discover,
                format!("Vertex {} has in-degree 0, enqueue", v),
                state.clone(),
                vec![v],
            );
        }
    }

    while let Some(v) = queue.pop_front() {
        state.visited.insert(v);
        state.order.push(v);
        state.frontier = queue.iter().copied().collect();
        state.current = Some(v);
        state.neighbor = None;
        rec.record_with(
            StepKind::Visit,
            format!("Dequeue {}, order now {:?}", v, state.order),
            state.clone(),
            vec![v],
        );

        for w in out_neighbors(&state.graph, v) {
            state.in_degree[w] -= 1;
            state.neighbor = Some(w);
            rec.record_with(
                StepKind::Update { changed: true },
                format!("Remove edge {} -> {}, in-degree of {} is {}", v, w, w, state.in_degree[w]),
                state.clone(),
                vec![v, w],
            );
            if state.in_degree[w] == 0 {
                queue.push_back(w);
                state.frontier = queue.iter().copied().collect();
                rec.record_with(
                    StepKind::Discover,
                    format!("Vertex {} has in-degree 0, enqueue", w),
                    state.clone(),
                    vec![w],
                );
            }
        }
    }

    state.current = None;
    state.neighbor = None;
    if state.order.len() < n {
        let description = format!(
            "Only {} of {} vertices ordered: the graph has a cycle",
            state.order.len(),
            n
        );
        rec.complete(Outcome::CycleDetected, description, state);
    } else {
        let description = format!("Topological order {:?}", state.order);
        rec.complete(Outcome::Solved, description, state);
    }
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respects_edges(graph: &DemoGraph, order: &[usize]) -> bool {
        let position = |v: usize| order.iter().position(|&x| x == v);
        graph
            .edges()
            .iter()
            .all(|e| position(e.from) < position(e.to))
    }

    fn cyclic() -> DemoGraph {
        DemoGraph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap()
    }

    #[test]
    fn depth_first_demo_order() {
        let trace = TopologicalSort::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::Solved));
        assert_eq!(last.data.finished, vec![0, 1, 3, 2, 4, 5]);
        assert_eq!(last.data.order, vec![5, 4, 2, 3, 1, 0]);
        assert!(respects_edges(&dag_demo(), &last.data.order));
    }

    #[test]
    fn kahn_demo_order() {
        let sort = TopologicalSort::new(dag_demo(), TopologicalVariant::Kahn).unwrap();
        let trace = sort.generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.order, vec![4, 5, 0, 2, 3, 1]);
        assert!(respects_edges(&dag_demo(), &last.data.order));
        assert_eq!(trace[0].data.in_degree, vec![2, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn kahn_reports_cycle_as_outcome() {
        let sort = TopologicalSort::new(cyclic(), TopologicalVariant::Kahn).unwrap();
        let trace = sort.generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::CycleDetected));
        assert!(last.data.order.is_empty());
    }

    #[test]
    fn depth_first_reports_back_edge() {
        let sort = TopologicalSort::new(cyclic(), TopologicalVariant::DepthFirst).unwrap();
        let trace = sort.generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::CycleDetected));
        assert_eq!(last.data.current, Some(2));
        assert_eq!(last.data.neighbor, Some(0));
        assert_eq!(trace.iter().filter(|s| s.completed).count(), 1);
    }

    #[test]
    fn undirected_graph_is_rejected() {
        let graph = DemoGraph::from_edges(2, false, [(0, 1, 1)]).unwrap();
        assert!(TopologicalSort::new(graph, TopologicalVariant::Kahn).is_err());
    }

    #[test]
    fn variant_names() {
        let json = serde_json::to_string(&TopologicalVariant::DepthFirst).unwrap();
        assert_eq!(json, "\"depth-first\"");
        let kahn: TopologicalVariant = serde_json::from_str("\"kahn\"").unwrap();
        assert_eq!(kahn, TopologicalVariant::Kahn);
    }
}
