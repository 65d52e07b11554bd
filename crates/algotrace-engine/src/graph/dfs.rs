//! Recursive depth-first search.
//!
//! Neighbors are tried in adjacency-matrix column order. A `Discover` step is
//! recorded for each unvisited neighbor before recursing into it, and a
//! `Backtrack` step when a vertex's call returns.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};

use super::{traversal_demo, TraversalState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::DepthFirstSearch,
    name: "Depth-First Search",
    category: Category::Graph,
    description: "Explores as far as possible along each branch before backtracking, using \
                  the call stack to remember where to resume.",
    time_complexity: "O(V^2) with an adjacency matrix",
    space_complexity: "O(V)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dfs(u):
    visited.add(u)
    for v in neighbors(u):
        if v not in visited: dfs(v)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstSearch {
    graph: DemoGraph,
    start: usize,
}

impl DepthFirstSearch {
    pub fn new(graph: DemoGraph, start: usize) -> Result<Self, CoreError> {
        graph.check_vertex(start)?;
        Ok(DepthFirstSearch { graph, start })
    }
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        DepthFirstSearch {
            graph: traversal_demo(),
            start: 0,
        }
    }
}

struct Run<'g> {
    graph: &'g DemoGraph,
    state: TraversalState,
    rec: TraceRecorder<TraversalState>,
}

impl Run<'_> {
    fn visit(&mut self, u: usize) {
        self.state.visited.insert(u);
        self.state.frontier.push(u);
        self.state.current = Some(u);
        self.state.neighbor = None;
        self.rec
            .record(StepKind::Visit, format!("Visiting node {}", u), self.state.clone());

        for v in self.graph.neighbors(u) {
            if self.state.visited.contains(&v) {
                continue;
            }
            self.state.current = Some(u);
            self.state.neighbor = Some(v);
            self.rec.record(
                StepKind::Discover,
                format!("Found unvisited neighbor {} of {}", v, u),
                self.state.clone(),
            );
            self.visit(v);
        }

        self.state.frontier.pop();
        self.state.finished.push(u);
        self.state.current = self.state.frontier.last().copied();
        self.state.neighbor = None;
        let description = match self.state.current {
            Some(parent) => format!("Finished node {}, backtracking to {}", u, parent),
            None => format!("Finished node {}, search tree complete", u),
        };
        self.rec.record(StepKind::Backtrack, description, self.state.clone());
    }
}

impl TraceGenerator for DepthFirstSearch {
    type State = TraversalState;

    fn generate_steps(&self) -> Trace<TraversalState> {
        let mut run = Run {
            graph: &self.graph,
            state: TraversalState::new(&self.graph),
            rec: TraceRecorder::new(),
        };
        run.rec.record(
            StepKind::Init,
            format!("Depth-first search from node {}", self.start),
            run.state.clone(),
        );
        run.visit(self.start);

        let order: Vec<usize> = run.state.visited.iter().copied().collect();
        run.rec.complete(
            Outcome::Solved,
            format!("DFS complete. Visit order: {:?}", order),
            run.state.clone(),
        );
        run.rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_order(trace: &Trace<TraversalState>) -> Vec<usize> {
        trace.last().unwrap().data.visited.iter().copied().collect()
    }

    #[test]
    fn demo_visit_order_follows_column_order() {
        let trace = DepthFirstSearch::default().generate_steps();
        // 0 -> 1 -> 3 -> 5 -> 4 -> 2
        assert_eq!(visit_order(&trace), vec![0, 1, 3, 5, 4, 2]);
    }

    #[test]
    fn every_visit_has_a_backtrack() {
        let trace = DepthFirstSearch::default().generate_steps();
        let visits = trace.iter().filter(|s| s.kind == StepKind::Visit).count();
        let backtracks = trace.iter().filter(|s| s.kind == StepKind::Backtrack).count();
        assert_eq!(visits, 6);
        assert_eq!(visits, backtracks);
        // every vertex except the start is discovered exactly once
        let discovers = trace.iter().filter(|s| s.kind == StepKind::Discover).count();
        assert_eq!(discovers, 5);
    }

    #[test]
    fn unreachable_vertices_stay_unvisited() {
        let graph = DemoGraph::from_edges(4, false, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let trace = DepthFirstSearch::new(graph, 0).unwrap().generate_steps();
        assert_eq!(visit_order(&trace), vec![0, 1]);
        assert!(trace.last().unwrap().data.frontier.is_empty());
    }

    #[test]
    fn post_order_is_recorded() {
        let graph = DemoGraph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)]).unwrap();
        let trace = DepthFirstSearch::new(graph, 0).unwrap().generate_steps();
        assert_eq!(trace.last().unwrap().data.finished, vec![2, 1, 0]);
    }

    #[test]
    fn start_out_of_range_is_rejected() {
        assert!(DepthFirstSearch::new(traversal_demo(), 6).is_err());
    }
}
