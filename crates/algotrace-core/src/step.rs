//! The step record: one animation frame of an algorithm trace.
//!
//! A [`Step`] pairs a typed snapshot of algorithm state (`data`) with a
//! [`StepKind`] tag saying which transition produced it and a human-readable
//! description. Generic players match on the kind; family renderers read the
//! payload. A [`Trace`] is the full ordered sequence produced by one run.
//!
//! Every trace starts with an [`StepKind::Init`] step holding the untouched
//! input and ends with exactly one [`StepKind::Complete`] step.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::StepId;

/// The full ordered sequence of steps produced by one generator run.
pub type Trace<S> = Vec<Step<S>>;

/// What a `Decide` step chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Knapsack: include the item.
    Take,
    /// Knapsack: leave the item out.
    Skip,
    /// String DP: characters are equal.
    Match,
    /// String DP: characters differ.
    Mismatch,
    /// MST: edge joins two components.
    Accept,
    /// MST: edge would close a cycle.
    Reject,
    /// Binary search: continue in the lower half.
    GoLeft,
    /// Binary search: continue in the upper half.
    GoRight,
}

/// How a trace ended. Carried by the terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The algorithm ran to its normal conclusion.
    Solved,
    /// A search located the target at `index`.
    Found { index: usize },
    /// A search exhausted its range without a match.
    NotFound,
    /// The requested answer does not exist (coin change, disconnected MST).
    Unreachable,
    /// A shortest-path run found a reachable negative-weight cycle.
    NegativeCycle,
    /// A topological sort found a directed cycle.
    CycleDetected,
}

/// Closed set of transitions a step can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// Initial state before any work.
    Init,
    /// A cell, call or round is about to be worked on.
    Consider,
    /// Values are being compared.
    Compare,
    /// Two positions were exchanged.
    Swap,
    /// A vertex was entered, dequeued or added to a tree.
    Visit,
    /// A vertex was found or enqueued.
    Discover,
    /// A branch was chosen.
    Decide { decision: Decision },
    /// A table cell or tentative value was written (`changed`) or kept.
    Update { changed: bool },
    /// A memoized value avoided recomputation.
    MemoHit,
    /// Processing of a vertex, pass or phase ended.
    Finish,
    /// Unwinding: DFS post-order exit or DP solution recovery.
    Backtrack,
    /// Terminal step.
    Complete { outcome: Outcome },
}

impl StepKind {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepKind::Complete { .. })
    }

    /// Returns the outcome for terminal steps.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            StepKind::Complete { outcome } => Some(*outcome),
            _ => None,
        }
    }
}

/// A snapshot of algorithm state sufficient to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<S> {
    pub id: StepId,
    pub kind: StepKind,
    pub description: String,
    pub data: S,
    /// Indices for generic emphasis. Meaning depends on the family.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<usize>,
    /// True exactly for the terminal step.
    pub completed: bool,
}

impl<S> Step<S> {
    /// Converts the payload, keeping every other field.
    pub fn map_data<T, E>(self, f: impl FnOnce(S) -> Result<T, E>) -> Result<Step<T>, E> {
        Ok(Step {
            id: self.id,
            kind: self.kind,
            description: self.description,
            data: f(self.data)?,
            highlights: self.highlights,
            completed: self.completed,
        })
    }
}

/// Payload shared by the sorting and searching families.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrayState {
    /// Full working array at this instant.
    pub array: Vec<i64>,
    /// Indices being compared.
    pub comparing: SmallVec<[usize; 2]>,
    /// Indices being swapped. Empty outside swap steps.
    pub swapping: SmallVec<[usize; 2]>,
    /// Settled positions. Searching uses it as the found marker.
    pub sorted: BTreeSet<usize>,
}

impl ArrayState {
    /// A state with nothing compared, swapped or settled.
    pub fn new(array: Vec<i64>) -> Self {
        ArrayState {
            array,
            ..ArrayState::default()
        }
    }

    /// Every index mentioned by the state, for bounds checks.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.comparing
            .iter()
            .chain(self.swapping.iter())
            .chain(self.sorted.iter())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn step_kind_serializes_with_tag() {
        let kind = StepKind::Decide {
            decision: Decision::Take,
        };
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json["kind"], "decide");
        assert_eq!(json["decision"], "take");

        let complete = StepKind::Complete {
            outcome: Outcome::Found { index: 3 },
        };
        let json = serde_json::to_value(complete).unwrap();
        assert_eq!(json["kind"], "complete");
        assert_eq!(json["outcome"]["outcome"], "found");
        assert_eq!(json["outcome"]["index"], 3);
    }

    #[test]
    fn terminal_kind_reports_outcome() {
        assert!(StepKind::Complete {
            outcome: Outcome::Solved
        }
        .is_terminal());
        assert!(!StepKind::Compare.is_terminal());
        assert_eq!(StepKind::Init.outcome(), None);
        assert_eq!(
            StepKind::Complete {
                outcome: Outcome::NegativeCycle
            }
            .outcome(),
            Some(Outcome::NegativeCycle)
        );
    }

    #[test]
    fn map_data_keeps_metadata() {
        let step = Step {
            id: StepId(4),
            kind: StepKind::Swap,
            description: "swap".into(),
            data: 21u32,
            highlights: vec![1, 2],
            completed: false,
        };
        let mapped = step
            .map_data(|n| Ok::<_, std::convert::Infallible>(n * 2))
            .unwrap();
        assert_eq!(mapped.id, StepId(4));
        assert_eq!(mapped.data, 42);
        assert_eq!(mapped.highlights, vec![1, 2]);
    }

    #[test]
    fn array_state_indices_cover_all_sets() {
        let mut state = ArrayState::new(vec![3, 1, 2]);
        state.comparing = smallvec![0, 1];
        state.swapping = smallvec![1];
        state.sorted.insert(2);
        let mut seen: Vec<usize> = state.indices().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 1, 2]);
    }

    #[test]
    fn empty_highlights_are_omitted_from_json() {
        let step = Step {
            id: StepId(0),
            kind: StepKind::Init,
            description: "start".into(),
            data: ArrayState::new(vec![1]),
            highlights: Vec::new(),
            completed: false,
        };
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("highlights").is_none());
        assert_eq!(json["data"]["array"], serde_json::json!([1]));
    }
}
