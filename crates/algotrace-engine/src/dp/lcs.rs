//! Longest common subsequence.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, Decision, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::Table;

pub const DEMO_FIRST: &str = "ABCBDAB";
pub const DEMO_SECOND: &str = "BDCABA";

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::LongestCommonSubsequence,
    name: "Longest Common Subsequence",
    category: Category::DynamicProgramming,
    description: "Finds the longest sequence of characters appearing in order (not \
                  necessarily contiguously) in both strings.",
    time_complexity: "O(m * n)",
    space_complexity: "O(m * n)",
    difficulty: Difficulty::Medium,
    reference_code: "\
for i in 1..=m:
    for j in 1..=n:
        if a[i-1] == b[j-1]: dp[i][j] = dp[i-1][j-1] + 1
        else: dp[i][j] = max(dp[i-1][j], dp[i][j-1])",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsState {
    pub first: String,
    pub second: String,
    pub table: Table<usize>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    /// Recovered during backtracking, growing from the end.
    pub subsequence: String,
    pub result: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestCommonSubsequence {
    first: String,
    second: String,
}

impl LongestCommonSubsequence {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        LongestCommonSubsequence {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Default for LongestCommonSubsequence {
    fn default() -> Self {
        LongestCommonSubsequence::new(DEMO_FIRST, DEMO_SECOND)
    }
}

impl TraceGenerator for LongestCommonSubsequence {
    type State = LcsState;

    fn generate_steps(&self) -> Trace<LcsState> {
        let a: Vec<char> = self.first.chars().collect();
        let b: Vec<char> = self.second.chars().collect();
        let (m, n) = (a.len(), b.len());
        let mut rec = TraceRecorder::new();
        let mut state = LcsState {
            first: self.first.clone(),
            second: self.second.clone(),
            table: vec![vec![0; n + 1]; m + 1],
            i: None,
            j: None,
            subsequence: String::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!("Comparing \"{}\" and \"{}\"; row 0 and column 0 are 0", self.first, self.second),
            state.clone(),
        );

        for i in 1..=m {
            for j in 1..=n {
                state.i = Some(i);
                state.j = Some(j);
                rec.record_with(
                    StepKind::Compare,
                    format!("Compare a[{}] = '{}' with b[{}] = '{}'", i - 1, a[i - 1], j - 1, b[j - 1]),
                    state.clone(),
                    vec![i, j],
                );

                let (decision, value, description) = if a[i - 1] == b[j - 1] {
                    let v = state.table[i - 1][j - 1] + 1;
                    (Decision::Match, v, format!("Match '{}': diagonal + 1 = {}", a[i - 1], v))
                } else {
                    let (up, left) = (state.table[i - 1][j], state.table[i][j - 1]);
                    let v = up.max(left);
                    (Decision::Mismatch, v, format!("Mismatch: max(up {}, left {}) = {}", up, left, v))
                };
                rec.record_with(
                    StepKind::Decide { decision },
                    description,
                    state.clone(),
                    vec![i, j],
                );

                state.table[i][j] = value;
                rec.record_with(
                    StepKind::Update { changed: true },
                    format!("dp[{}][{}] = {}", i, j, value),
                    state.clone(),
                    vec![i, j],
                );
            }
        }

        let (mut i, mut j) = (m, n);
        while i > 0 && j > 0 {
            state.i = Some(i);
            state.j = Some(j);
            let description = if a[i - 1] == b[j - 1] {
                state.subsequence.insert(0, a[i - 1]);
                i -= 1;
                j -= 1;
                format!("'{}' is part of the subsequence, move diagonally", a[i])
            } else if state.table[i - 1][j] >= state.table[i][j - 1] {
                i -= 1;
                format!("Move up to dp[{}][{}]", i, j)
            } else {
                j -= 1;
                format!("Move left to dp[{}][{}]", i, j)
            };
            rec.record_with(StepKind::Backtrack, description, state.clone(), vec![i, j]);
        }

        let length = state.table[m][n];
        state.i = None;
        state.j = None;
        state.result = Some(length);
        let description = format!("LCS length {}: \"{}\"", length, state.subsequence);
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

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut chars = haystack.chars();
        needle.chars().all(|c| chars.any(|h| h == c))
    }

    #[test]
    fn demo_length_is_four() {
        let trace = LongestCommonSubsequence::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(4));
        assert_eq!(last.data.subsequence.chars().count(), 4);
        assert!(is_subsequence(&last.data.subsequence, DEMO_FIRST));
        assert!(is_subsequence(&last.data.subsequence, DEMO_SECOND));
    }

    #[test]
    fn ties_move_up() {
        // At dp[2][2] up and left are both 1; going up recovers "A", not "B".
        let trace = LongestCommonSubsequence::new("AB", "BA").generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(1));
        assert_eq!(last.data.subsequence, "A");
    }

    #[test]
    fn empty_string_has_empty_lcs() {
        let trace = LongestCommonSubsequence::new("", "ABC").generate_steps();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().data.result, Some(0));
    }
}
