//! Breadth-first search with a FIFO queue.
//!
//! Vertices are marked visited when enqueued, so no vertex enters the queue
//! twice.

use std::collections::VecDeque;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, DemoGraph, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};

use super::{traversal_demo, TraversalState};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BreadthFirstSearch,
    name: "Breadth-First Search",
    category: Category::Graph,
    description: "Visits vertices level by level from the start, using a queue so that every \
                  vertex at distance d is processed before any vertex at distance d + 1.",
    time_complexity: "O(V^2) with an adjacency matrix",
    space_complexity: "O(V)",
    difficulty: Difficulty::Easy,
    reference_code: "\
queue = [start]; visited = {start}
while queue not empty:
    u = queue.pop_front()
    for v in neighbors(u):
        if v not in visited: visited.add(v); queue.push_back(v)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadthFirstSearch {
    graph: DemoGraph,
    start: usize,
}

impl BreadthFirstSearch {
    pub fn new(graph: DemoGraph, start: usize) -> Result<Self, CoreError> {
        graph.check_vertex(start)?;
        Ok(BreadthFirstSearch { graph, start })
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        BreadthFirstSearch {
            graph: traversal_demo(),
            start: 0,
        }
    }
}

impl TraceGenerator for BreadthFirstSearch {
    type State = TraversalState;

    fn generate_steps(&self) -> Trace<TraversalState> {
        let mut rec = TraceRecorder::new();
        let mut state = TraversalState::new(&self.graph);
        let mut queue = VecDeque::new();

        rec.record(
            StepKind::Init,
            format!("Breadth-first search from node {}", self.start),
            state.clone(),
        );

        state.visited.insert(self.start);
        queue.push_back(self.start);
        state.frontier = queue.iter().copied().collect();
        rec.record(
            StepKind::Discover,
            format!("Enqueued start node {}", self.start),
            state.clone(),
        );

        while let Some(u) = queue.pop_front() {
            state.current = Some(u);
            state.neighbor = None;
            state.frontier = queue.iter().copied().collect();
            rec.record(
                StepKind::Visit,
                format!("Dequeued node {}", u),
                state.clone(),
            );

            for v in self.graph.neighbors(u) {
                if !state.visited.insert(v) {
                    continue;
                }
                queue.push_back(v);
                state.neighbor = Some(v);
                state.frontier = queue.iter().copied().collect();
                rec.record(
                    StepKind::Discover,
                    format!("Enqueued neighbor {} of {}", v, u),
                    state.clone(),
                );
            }

            state.finished.push(u);
            state.neighbor = None;
            rec.record(
                StepKind::Finish,
                format!("Finished processing node {}", u),
                state.clone(),
            );
        }

        state.current = None;
        rec.complete(
            Outcome::Solved,
            format!("BFS complete. Processing order: {:?}", state.finished),
            state,
        );
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
    fn demo_is_processed_level_by_level() {
        let trace = BreadthFirstSearch::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.finished, vec![0, 1, 2, 3, 4, 5]);
        assert!(last.data.frontier.is_empty());
    }

    #[test]
    fn one_enqueue_and_one_dequeue_per_reachable_vertex() {
        let trace = BreadthFirstSearch::default().generate_steps();
        let count = |kind: StepKind| trace.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(StepKind::Discover), 6);
        assert_eq!(count(StepKind::Visit), 6);
        assert_eq!(count(StepKind::Finish), 6);
    }

    #[test]
    fn queue_snapshot_is_fifo() {
        let graph = DemoGraph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (0, 3, 1)]).unwrap();
        let trace = BreadthFirstSearch::new(graph, 0).unwrap().generate_steps();
        let after_enqueues = trace
            .iter()
            .filter(|s| s.kind == StepKind::Discover)
            .last()
            .unwrap();
        assert_eq!(after_enqueues.data.frontier, vec![1, 2, 3]);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let graph = DemoGraph::from_edges(3, false, [(1, 2, 1)]).unwrap();
        let trace = BreadthFirstSearch::new(graph, 0).unwrap().generate_steps();
        assert_eq!(trace.last().unwrap().data.finished, vec![0]);
        assert_eq!(trace.len(), 5);
    }
}
