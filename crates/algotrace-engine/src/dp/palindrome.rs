//! Palindrome partitioning with the fewest cuts.
//!
//! Two phases. The palindrome table is filled by increasing substring length
//! (single characters seeded true). The cut table then gives every
//! palindromic interval zero cuts and minimizes the rest over split points.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, Difficulty, Outcome, StepKind, Trace, TraceGenerator,
    TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::{fmt_cell, Table};

pub const DEMO_TEXT: &str = "banana";

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::PalindromePartitioning,
    name: "Palindrome Partitioning",
    category: Category::DynamicProgramming,
    description: "Splits a string into palindromic pieces with as few cuts as possible, \
                  after first tabulating which substrings are palindromes.",
    time_complexity: "O(n^3)",
    space_complexity: "O(n^2)",
    difficulty: Difficulty::Hard,
    reference_code: "\
pal[i][i] = true
for len in 2..=n: pal[i][j] = s[i] == s[j] and (len == 2 or pal[i+1][j-1])
for len in 2..=n:
    if pal[i][j]: cuts[i][j] = 0
    else: cuts[i][j] = min over k in i..j of cuts[i][k] + cuts[k+1][j] + 1",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeState {
    pub text: String,
    pub is_palindrome: Table<bool>,
    /// Fewest cuts per interval, `None` until computed.
    pub cuts: Table<Option<usize>>,
    pub split: Table<Option<usize>>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    pub k: Option<usize>,
    /// Recovered pieces, left to right.
    pub partition: Vec<String>,
    pub result: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromePartitioning {
    text: String,
}

impl PalindromePartitioning {
    pub fn new(text: impl Into<String>) -> Self {
        PalindromePartitioning { text: text.into() }
    }
}

impl Default for PalindromePartitioning {
    fn default() -> Self {
        PalindromePartitioning::new(DEMO_TEXT)
    }
}

impl TraceGenerator for PalindromePartitioning {
    type State = PalindromeState;

    fn generate_steps(&self) -> Trace<PalindromeState> {
        let s: Vec<char> = self.text.chars().collect();
        let n = s.len();
        let mut is_palindrome = vec![vec![false; n]; n];
        let mut cuts = vec![vec![None; n]; n];
        for i in 0..n {
            is_palindrome[i][i] = true;
            cuts[i][i] = Some(0);
        }
        let mut rec = TraceRecorder::new();
        let mut state = PalindromeState {
            text: self.text.clone(),
            is_palindrome,
            cuts,
            split: vec![vec![None; n]; n],
            i: None,
            j: None,
            k: None,
            partition: Vec::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!("\"{}\": every single character is a palindrome", self.text),
            state.clone(),
        );

        for len in 2..=n {
            for i in 0..=n - len {
                let j = i + len - 1;
                state.i = Some(i);
                state.j = Some(j);
                rec.record_with(
                    StepKind::Compare,
                    format!("Compare s[{}] = '{}' with s[{}] = '{}'", i, s[i], j, s[j]),
                    state.clone(),
                    vec![i, j],
                );
                let inner = len == 2 || state.is_palindrome[i + 1][j - 1];
                let palindrome = s[i] == s[j] && inner;
                state.is_palindrome[i][j] = palindrome;
                let piece: String = s[i..=j].iter().collect();
                let description = if palindrome {
                    format!("\"{}\" is a palindrome", piece)
                } else {
                    format!("\"{}\" is not a palindrome", piece)
                };
                rec.record_with(
                    StepKind::Update { changed: palindrome },
                    description,
                    state.clone(),
                    vec![i, j],
                );
            }
        }

        for len in 2..=n {
            for i in 0..=n - len {
                let j = i + len - 1;
                state.i = Some(i);
                state.j = Some(j);
                state.k = None;
                let piece: String = s[i..=j].iter().collect();
                rec.record_with(
                    StepKind::Consider,
                    format!("Fewest cuts for \"{}\"", piece),
                    state.clone(),
                    vec![i, j],
                );
                if state.is_palindrome[i][j] {
                    state.cuts[i][j] = Some(0);
                    rec.record_with(
                        StepKind::Update { changed: true },
                        format!("\"{}\" is a palindrome: 0 cuts", piece),
                        state.clone(),
                        vec![i, j],
                    );
                    continue;
                }
                for k in i..j {
                    state.k = Some(k);
                    let left = state.cuts[i][k].unwrap_or_default();
                    let right = state.cuts[k + 1][j].unwrap_or_default();
                    let candidate = left + right + 1;
                    rec.record_with(
                        StepKind::Compare,
                        format!(
                            "Cut after s[{}]: {} + {} + 1 = {} vs {}",
                            k,
                            left,
                            right,
                            candidate,
                            fmt_cell(state.cuts[i][j])
                        ),
                        state.clone(),
                        vec![i, k, j],
                    );
                    let improved = state.cuts[i][j].map_or(true, |best| candidate < best);
                    let description = if improved {
                        state.cuts[i][j] = Some(candidate);
                        state.split[i][j] = Some(k);
                        format!("cuts[{}][{}] = {}", i, j, candidate)
                    } else {
                        format!("cuts[{}][{}] stays {}", i, j, fmt_cell(state.cuts[i][j]))
                    };
                    rec.record_with(
                        StepKind::Update { changed: improved },
                        description,
                        state.clone(),
                        vec![i, j],
                    );
                }
            }
        }

        state.k = None;
        if n > 0 {
            let mut pending = vec![(0, n - 1)];
            while let Some((i, j)) = pending.pop() {
                match state.split[i][j] {
                    Some(k) if !state.is_palindrome[i][j] => {
                        pending.push((k + 1, j));
                        pending.push((i, k));
                    }
                    _ => {
                        let piece: String = s[i..=j].iter().collect();
                        state.i = Some(i);
                        state.j = Some(j);
                        state.partition.push(piece.clone());
                        rec.record_with(
                            StepKind::Backtrack,
                            format!("Piece \"{}\"", piece),
                            state.clone(),
                            (i..=j).collect(),
                        );
                    }
                }
            }
        }

        let best = if n == 0 {
            0
        } else {
            state.cuts[0][n - 1].unwrap_or_default()
        };
        state.i = None;
        state.j = None;
        state.result = Some(best);
        let description = format!("{} cuts: {}", best, state.partition.join(" | "));
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
    fn banana_needs_one_cut() {
        let trace = PalindromePartitioning::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(1));
        assert_eq!(last.data.partition, vec!["b", "anana"]);
    }

    #[test]
    fn single_characters_are_seeded() {
        let trace = PalindromePartitioning::default().generate_steps();
        let init = &trace[0].data;
        assert!((0..6).all(|i| init.is_palindrome[i][i]));
        assert!(!init.is_palindrome[1][5]);
        assert!(trace.last().unwrap().data.is_palindrome[1][5]);
    }

    #[test]
    fn no_palindromes_longer_than_one() {
        let trace = PalindromePartitioning::new("abc").generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(2));
        assert_eq!(last.data.partition, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_text() {
        let trace = PalindromePartitioning::new("").generate_steps();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().data.result, Some(0));
    }
}
