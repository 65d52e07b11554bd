//! Levenshtein edit distance with edit-script recovery.
//!
//! Recovery re-derives which neighbor produced each cell, checking
//! substitution (or keep), then deletion, then insertion.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, Decision, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::Table;

pub const DEMO_SOURCE: &str = "kitten";
pub const DEMO_TARGET: &str = "sitting";

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::EditDistance,
    name: "Edit Distance",
    category: Category::DynamicProgramming,
    description: "Counts the minimum number of single-character insertions, deletions and \
                  substitutions that turn one string into another.",
    time_complexity: "O(m * n)",
    space_complexity: "O(m * n)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dp[i][0] = i; dp[0][j] = j
for i in 1..=m:
    for j in 1..=n:
        if a[i-1] == b[j-1]: dp[i][j] = dp[i-1][j-1]
        else: dp[i][j] = 1 + min(dp[i-1][j], dp[i][j-1], dp[i-1][j-1])",
};

/// One step of the recovered edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    Keep { ch: char },
    Replace { from: char, to: char },
    Delete { ch: char },
    Insert { ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDistanceState {
    pub source: String,
    pub target: String,
    pub table: Table<usize>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    /// Edit script in source order, filled during backtracking.
    pub operations: Vec<EditOperation>,
    pub result: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDistance {
    source: String,
    target: String,
}

impl EditDistance {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        EditDistance {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for EditDistance {
    fn default() -> Self {
        EditDistance::new(DEMO_SOURCE, DEMO_TARGET)
    }
}

impl TraceGenerator for EditDistance {
    type State = EditDistanceState;

    fn generate_steps(&self) -> Trace<EditDistanceState> {
        let a: Vec<char> = self.source.chars().collect();
        let b: Vec<char> = self.target.chars().collect();
        let (m, n) = (a.len(), b.len());
        let mut table = vec![vec![0; n + 1]; m + 1];
        for (i, row) in table.iter_mut().enumerate() {
            row[0] = i;
        }
        table[0] = (0..=n).collect();
        let mut rec = TraceRecorder::new();
        let mut state = EditDistanceState {
            source: self.source.clone(),
            target: self.target.clone(),
            table,
            i: None,
            j: None,
            operations: Vec::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!(
                "Transform \"{}\" into \"{}\"; row 0 and column 0 count edits from the empty string",
                self.source, self.target
            ),
            state.clone(),
        );

        for i in 1..=m {
            for j in 1..=n {
                state.i = Some(i);
                state.j = Some(j);
                rec.record_with(
                    StepKind::Compare,
                    format!("Compare '{}' with '{}'", a[i - 1], b[j - 1]),
                    state.clone(),
                    vec![i, j],
                );

                let (decision, value, description) = if a[i - 1] == b[j - 1] {
                    let v = state.table[i - 1][j - 1];
                    (Decision::Match, v, format!("Match: copy diagonal {}", v))
                } else {
                    let delete = state.table[i - 1][j];
                    let insert = state.table[i][j - 1];
                    let replace = state.table[i - 1][j - 1];
                    let v = 1 + delete.min(insert).min(replace);
                    (
                        Decision::Mismatch,
                        v,
                        format!(
                            "Mismatch: 1 + min(delete {}, insert {}, replace {}) = {}",
                            delete, insert, replace, v
                        ),
                    )
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
        while i > 0 || j > 0 {
            state.i = Some(i);
            state.j = Some(j);
            let here = state.table[i][j];
            let op = if i > 0 && j > 0 && a[i - 1] == b[j - 1] && here == state.table[i - 1][j - 1] {
                i -= 1;
                j -= 1;
                EditOperation::Keep { ch: a[i] }
            } else if i > 0 && j > 0 && here == state.table[i - 1][j - 1] + 1 {
                i -= 1;
                j -= 1;
                EditOperation::Replace { from: a[i], to: b[j] }
            } else if i > 0 && here == state.table[i - 1][j] + 1 {
                i -= 1;
                EditOperation::Delete { ch: a[i] }
            } else {
                j -= 1;
                EditOperation::Insert { ch: b[j] }
            };
            state.operations.insert(0, op);
            let description = match op {
                EditOperation::Keep { ch } => format!("Keep '{}'", ch),
                EditOperation::Replace { from, to } => format!("Replace '{}' with '{}'", from, to),
                EditOperation::Delete { ch } => format!("Delete '{}'", ch),
                EditOperation::Insert { ch } => format!("Insert '{}'", ch),
            };
            rec.record_with(StepKind::Backtrack, description, state.clone(), vec![i, j]);
        }

        let distance = state.table[m][n];
        state.i = None;
        state.j = None;
        state.result = Some(distance);
        let description = format!("Edit distance {}", distance);
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

    fn apply(source: &str, ops: &[EditOperation]) -> String {
        let mut chars = source.chars();
        let mut out = String::new();
        for op in ops {
            match *op {
                EditOperation::Keep { ch } => {
                    assert_eq!(chars.next(), Some(ch));
                    out.push(ch);
                }
                EditOperation::Replace { from, to } => {
                    assert_eq!(chars.next(), Some(from));
                    out.push(to);
                }
                EditOperation::Delete { ch } => assert_eq!(chars.next(), Some(ch)),
                EditOperation::Insert { ch } => out.push(ch),
            }
        }
        assert_eq!(chars.next(), None);
        out
    }

    #[test]
    fn kitten_to_sitting() {
        let trace = EditDistance::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(3));
        assert_eq!(apply(DEMO_SOURCE, &last.data.operations), DEMO_TARGET);
        let edits = last
            .data
            .operations
            .iter()
            .filter(|op| !matches!(op, EditOperation::Keep { .. }))
            .count();
        assert_eq!(edits, 3);
    }

    #[test]
    fn base_row_and_column_are_seeded() {
        let trace = EditDistance::default().generate_steps();
        let init = &trace[0].data.table;
        assert_eq!(init[0], (0..=7).collect::<Vec<_>>());
        assert_eq!(init.iter().map(|row| row[0]).collect::<Vec<_>>(), (0..=6).collect::<Vec<_>>());
    }

    #[test]
    fn against_empty_string() {
        let trace = EditDistance::new("abc", "").generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(3));
        assert!(last
            .data
            .operations
            .iter()
            .all(|op| matches!(op, EditOperation::Delete { .. })));
    }

    #[test]
    fn substitution_is_preferred_on_ties() {
        let trace = EditDistance::new("a", "b").generate_steps();
        assert_eq!(
            trace.last().unwrap().data.operations,
            vec![EditOperation::Replace { from: 'a', to: 'b' }]
        );
    }
}
