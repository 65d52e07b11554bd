//! Trace recording and the generator contract.
//!
//! Generators build a fresh [`TraceRecorder`] inside every
//! [`TraceGenerator::generate_steps`] call and push one [`Step`] per
//! observable transition. The recorder assigns sequential [`StepId`]s and
//! sets `completed` from the step kind, so generators never manage either.

use serde::Serialize;

use crate::id::StepId;
use crate::info::AlgorithmInfo;
use crate::step::{Outcome, Step, StepKind, Trace};

/// The contract every algorithm satisfies so a generic player can animate it.
pub trait TraceGenerator {
    /// Family-specific payload carried by each step.
    type State: Clone + Serialize;

    /// Runs the algorithm from scratch and returns the full trace.
    ///
    /// Deterministic and idempotent: all mutable state lives inside the call.
    fn generate_steps(&self) -> Trace<Self::State>;

    /// Static metadata, independent of any trace.
    fn algorithm_info(&self) -> AlgorithmInfo;
}

/// Accumulates the steps of one generator run.
#[derive(Debug)]
pub struct TraceRecorder<S> {
    steps: Vec<Step<S>>,
}

impl<S> Default for TraceRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TraceRecorder<S> {
    pub fn new() -> Self {
        TraceRecorder { steps: Vec::new() }
    }

    /// Appends a step without highlights.
    pub fn record(&mut self, kind: StepKind, description: impl Into<String>, data: S) {
        self.record_with(kind, description, data, Vec::new());
    }

    /// Appends a step with highlighted indices.
    pub fn record_with(
        &mut self,
        kind: StepKind,
        description: impl Into<String>,
        data: S,
        highlights: Vec<usize>,
    ) {
        let id = StepId(self.steps.len() as u32);
        self.steps.push(Step {
            id,
            kind,
            description: description.into(),
            data,
            highlights,
            completed: kind.is_terminal(),
        });
    }

    /// Appends the terminal step.
    pub fn complete(&mut self, outcome: Outcome, description: impl Into<String>, data: S) {
        self.record(StepKind::Complete { outcome }, description, data);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The most recent step, if any.
    pub fn last(&self) -> Option<&Step<S>> {
        self.steps.last()
    }

    /// Consumes the recorder and returns the trace.
    pub fn finish(self) -> Trace<S> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_zero() {
        let mut rec = TraceRecorder::new();
        rec.record(StepKind::Init, "start", 0u8);
        rec.record(StepKind::Compare, "compare", 1u8);
        rec.complete(Outcome::Solved, "done", 2u8);
        let trace = rec.finish();
        let ids: Vec<u32> = trace.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn only_terminal_steps_are_completed() {
        let mut rec = TraceRecorder::new();
        rec.record(StepKind::Init, "start", ());
        rec.record_with(StepKind::Visit, "visit", (), vec![2]);
        rec.complete(Outcome::NotFound, "done", ());
        let trace = rec.finish();
        assert!(!trace[0].completed);
        assert!(!trace[1].completed);
        assert_eq!(trace[1].highlights, vec![2]);
        assert!(trace[2].completed);
    }

    #[test]
    fn len_and_last_track_recorded_steps() {
        let mut rec: TraceRecorder<u8> = TraceRecorder::default();
        assert!(rec.is_empty());
        rec.record(StepKind::Init, "start", 9);
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.last().map(|s| s.data), Some(9));
    }
}
