//! Longest increasing subsequence, O(n²) table.
//!
//! `table[i]` is the length of the best strictly increasing run ending at
//! `i`. Recovery starts from the first index holding the maximum and follows
//! predecessor links.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, Difficulty, Outcome, StepKind, Trace, TraceGenerator,
    TraceRecorder,
};
use serde::{Deserialize, Serialize};

pub const DEMO_ARRAY: [i64; 8] = [10, 9, 2, 5, 3, 7, 101, 18];

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::LongestIncreasingSubsequence,
    name: "Longest Increasing Subsequence",
    category: Category::DynamicProgramming,
    description: "Finds the longest strictly increasing subsequence by extending, for every \
                  element, the best run ending at any smaller earlier element.",
    time_complexity: "O(n^2)",
    space_complexity: "O(n)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dp = [1; n]
for i in 1..n:
    for j in 0..i:
        if a[i] > a[j] and dp[i] < dp[j] + 1:
            dp[i] = dp[j] + 1; prev[i] = j",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LisState {
    pub array: Vec<i64>,
    pub table: Vec<usize>,
    pub previous: Vec<Option<usize>>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    /// Recovered subsequence values, ascending.
    pub sequence: Vec<i64>,
    pub result: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestIncreasingSubsequence {
    input: Vec<i64>,
}

impl LongestIncreasingSubsequence {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        LongestIncreasingSubsequence {
            input: input.into(),
        }
    }
}

impl Default for LongestIncreasingSubsequence {
    fn default() -> Self {
        LongestIncreasingSubsequence::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for LongestIncreasingSubsequence {
    type State = LisState;

    fn generate_steps(&self) -> Trace<LisState> {
        let a = &self.input;
        let n = a.len();
        let mut rec = TraceRecorder::new();
        let mut state = LisState {
            array: a.clone(),
            table: vec![1; n],
            previous: vec![None; n],
            i: None,
            j: None,
            sequence: Vec::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            "Every element alone is a run of length 1",
            state.clone(),
        );

        for i in 1..n {
            state.i = Some(i);
            state.j = None;
            rec.record_with(
                StepKind::Consider,
                format!("Best run ending at a[{}] = {}", i, a[i]),
                state.clone(),
                vec![i],
            );
            for j in 0..i {
                state.j = Some(j);
                rec.record_with(
                    StepKind::Compare,
                    format!(
                        "a[{}] = {} vs a[{}] = {}; dp[{}] = {} vs dp[{}] + 1 = {}",
                        i,
                        a[i],
                        j,
                        a[j],
                        i,
                        state.table[i],
                        j,
                        state.table[j] + 1
                    ),
                    state.clone(),
                    vec![i, j],
                );
                let extend = a[i] > a[j] && state.table[i] < state.table[j] + 1;
                let description = if extend {
                    state.table[i] = state.table[j] + 1;
                    state.previous[i] = Some(j);
                    format!("Extend run through a[{}]: dp[{}] = {}", j, i, state.table[i])
                } else {
                    format!("No improvement, dp[{}] stays {}", i, state.table[i])
                };
                rec.record_with(
                    StepKind::Update { changed: extend },
                    description,
                    state.clone(),
                    vec![i, j],
                );
            }
        }

        state.j = None;
        let best = state.table.iter().copied().max().unwrap_or(0);
        let mut cursor = state.table.iter().position(|&len| len == best);
        while let Some(k) = cursor {
            state.i = Some(k);
            state.sequence.insert(0, a[k]);
            rec.record_with(
                StepKind::Backtrack,
                format!("Take a[{}] = {} (dp = {})", k, a[k], state.table[k]),
                state.clone(),
                vec![k],
            );
            cursor = state.previous[k];
        }

        state.i = None;
        state.result = Some(best);
        let description = format!("LIS length {}: {:?}", best, state.sequence);
        rec.complete(Outcome::Solved, description, state);
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
    fn demo_sequence() {
        let trace = LongestIncreasingSubsequence::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(4));
        assert_eq!(last.data.table, vec![1, 1, 1, 2, 2, 3, 4, 4]);
        assert_eq!(last.data.sequence, vec![2, 5, 7, 101]);
    }

    #[test]
    fn backtrack_starts_at_first_maximum() {
        let trace = LongestIncreasingSubsequence::default().generate_steps();
        let first_backtrack = trace
            .iter()
            .find(|s| s.kind == StepKind::Backtrack)
            .unwrap();
        assert_eq!(first_backtrack.data.i, Some(6));
    }

    #[test]
    fn one_compare_per_pair() {
        let trace = LongestIncreasingSubsequence::default().generate_steps();
        let compares = trace.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 8 * 7 / 2);
    }

    #[test]
    fn empty_input() {
        let trace = LongestIncreasingSubsequence::new(Vec::new()).generate_steps();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().data.result, Some(0));
    }
}
