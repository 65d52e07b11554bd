//! 0/1 knapsack.
//!
//! Row `i` covers the first `i` items (row 0 is the empty base case) and
//! column `w` is the capacity. Column 0 is filled like any other, since a
//! weightless item fits there. Each cell records a `Compare` of the skip and
//! take options, a `Decide { Take | Skip }` and the `Update` writing the
//! winner. Taking requires a strictly better value.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, Decision, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::Table;

pub const DEMO_WEIGHTS: [usize; 4] = [1, 3, 4, 5];
pub const DEMO_VALUES: [i64; 4] = [1, 4, 5, 7];
pub const DEMO_CAPACITY: usize = 7;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Knapsack,
    name: "0/1 Knapsack",
    category: Category::DynamicProgramming,
    description: "Chooses a subset of items with maximum total value whose total weight fits \
                  the capacity, deciding take or skip for every item at every capacity.",
    time_complexity: "O(n * W)",
    space_complexity: "O(n * W)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dp[0][w] = 0
for i in 1..=n:
    for w in 0..=W:
        dp[i][w] = dp[i-1][w]
        if weight[i] <= w:
            dp[i][w] = max(dp[i][w], dp[i-1][w - weight[i]] + value[i])",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackState {
    pub weights: Vec<usize>,
    pub values: Vec<i64>,
    pub capacity: usize,
    pub table: Table<i64>,
    /// 1-based row being filled.
    pub item: Option<usize>,
    pub weight: Option<usize>,
    /// 0-based indices of items in the recovered solution.
    pub selected: Vec<usize>,
    pub result: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    weights: Vec<usize>,
    values: Vec<i64>,
    capacity: usize,
}

impl Knapsack {
    /// Rejects mismatched weight/value lists, negative values and value
    /// totals that overflow `i64`.
    pub fn new(weights: Vec<usize>, values: Vec<i64>, capacity: usize) -> Result<Self, CoreError> {
        if weights.len() != values.len() {
            return Err(CoreError::InvalidInput {
                reason: format!(
                    "knapsack has {} weights but {} values",
                    weights.len(),
                    values.len()
                ),
            });
        }
        if let Some(v) = values.iter().find(|&&v| v < 0) {
            return Err(CoreError::InvalidInput {
                reason: format!("knapsack values must be non-negative, got {}", v),
            });
        }
        if values.iter().try_fold(0i64, |sum, &v| sum.checked_add(v)).is_none() {
            return Err(CoreError::InvalidInput {
                reason: "knapsack values sum past i64::MAX".to_string(),
            });
        }
        Ok(Knapsack {
            weights,
            values,
            capacity,
        })
    }
}

impl Default for Knapsack {
    fn default() -> Self {
        Knapsack {
            weights: DEMO_WEIGHTS.to_vec(),
            values: DEMO_VALUES.to_vec(),
            capacity: DEMO_CAPACITY,
        }
    }
}

impl TraceGenerator for Knapsack {
    type State = KnapsackState;

    fn generate_steps(&self) -> Trace<KnapsackState> {
        let n = self.weights.len();
        let cap = self.capacity;
        let mut rec = TraceRecorder::new();
        let mut state = KnapsackState {
            weights: self.weights.clone(),
            values: self.values.clone(),
            capacity: cap,
            table: vec![vec![0; cap + 1]; n + 1],
            item: None,
            weight: None,
            selected: Vec::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!("{} items, capacity {}; row 0 is 0", n, cap),
            state.clone(),
        );

        for i in 1..=n {
            let (wt, val) = (self.weights[i - 1], self.values[i - 1]);
            for w in 0..=cap {
                state.item = Some(i);
                state.weight = Some(w);
                let skip = state.table[i - 1][w];

                let (decision, best, description) = if wt > w {
                    rec.record_with(
                        StepKind::Compare,
                        format!("Item {} weighs {} > capacity {}", i, wt, w),
                        state.clone(),
                        vec![i, w],
                    );
                    (Decision::Skip, skip, format!("Skip item {}: too heavy", i))
                } else {
                    let take = state.table[i - 1][w - wt] + val;
                    rec.record_with(
                        StepKind::Compare,
                        format!(
                            "Item {} at capacity {}: skip = {}, take = {} + {} = {}",
                            i,
                            w,
                            skip,
                            state.table[i - 1][w - wt],
                            val,
                            take
                        ),
                        state.clone(),
                        vec![i, w],
                    );
                    if take > skip {
                        (Decision::Take, take, format!("Take item {} for {}", i, take))
                    } else {
                        (Decision::Skip, skip, format!("Skip item {}, keep {}", i, skip))
                    }
                };
                rec.record_with(
                    StepKind::Decide { decision },
                    description,
                    state.clone(),
                    vec![i, w],
                );

                state.table[i][w] = best;
                rec.record_with(
                    StepKind::Update { changed: true },
                    format!("dp[{}][{}] = {}", i, w, best),
                    state.clone(),
                    vec![i, w],
                );
            }
        }

        let mut w = cap;
        for i in (1..=n).rev() {
            state.item = Some(i);
            state.weight = Some(w);
            let description = if state.table[i][w] != state.table[i - 1][w] {
                state.selected.insert(0, i - 1);
                let taken = format!("dp[{}][{}] differs from the row above: item {} taken", i, w, i);
                w -= self.weights[i - 1];
                taken
            } else {
                format!("dp[{}][{}] equals the row above: item {} not taken", i, w, i)
            };
            rec.record_with(StepKind::Backtrack, description, state.clone(), vec![i, w]);
        }

        let best = state.table[n][cap];
        state.item = None;
        state.weight = None;
        state.result = Some(best);
        let description = format!("Maximum value {} using items {:?}", best, state.selected);
        rec.complete(Outcome::Solved, description, state);
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
