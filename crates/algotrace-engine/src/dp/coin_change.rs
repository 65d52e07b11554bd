//! Minimum coin change.
//!
//! `table[a]` is the fewest coins summing to `a`, `None` while unreachable.
//! An amount that stays unreachable is reported as `-1` in a normal terminal
//! step with [`Outcome::Unreachable`].

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::fmt_cell;

pub const DEMO_COINS: [usize; 3] = [1, 2, 5];
pub const DEMO_AMOUNT: usize = 11;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::CoinChange,
    name: "Coin Change",
    category: Category::DynamicProgramming,
    description: "Finds the fewest coins of the given denominations that add up to an \
                  amount, building the answer for every smaller amount first.",
    time_complexity: "O(amount * coins)",
    space_complexity: "O(amount)",
    difficulty: Difficulty::Medium,
    reference_code: "\
dp = [inf; amount + 1]; dp[0] = 0
for a in 1..=amount:
    for c in coins:
        if c <= a: dp[a] = min(dp[a], dp[a - c] + 1)
return dp[amount] if finite else -1",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinChangeState {
    pub coins: Vec<usize>,
    pub amount: usize,
    /// `None` = unreachable so far.
    pub table: Vec<Option<usize>>,
    /// Coin that produced each reachable amount's best count.
    pub last_coin: Vec<Option<usize>>,
    pub current_amount: Option<usize>,
    pub current_coin: Option<usize>,
    /// Coins of the recovered solution, in recovery order.
    pub coins_used: Vec<usize>,
    /// Fewest coins, or `-1` when the amount cannot be made.
    pub result: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinChange {
    coins: Vec<usize>,
    amount: usize,
}

impl CoinChange {
    /// Rejects a zero denomination.
    pub fn new(coins: Vec<usize>, amount: usize) -> Result<Self, CoreError> {
        if coins.contains(&0) {
            return Err(CoreError::InvalidInput {
                reason: "coin denominations must be positive".to_string(),
            });
        }
        Ok(CoinChange { coins, amount })
    }
}

impl Default for CoinChange {
    fn default() -> Self {
        CoinChange {
            coins: DEMO_COINS.to_vec(),
            amount: DEMO_AMOUNT,
        }
    }
}

impl TraceGenerator for CoinChange {
    type State = CoinChangeState;

    fn generate_steps(&self) -> Trace<CoinChangeState> {
        let amount = self.amount;
        let mut table = vec![None; amount + 1];
        table[0] = Some(0);
        let mut rec = TraceRecorder::new();
        let mut state = CoinChangeState {
            coins: self.coins.clone(),
            amount,
            table,
            last_coin: vec![None; amount + 1],
            current_amount: None,
            current_coin: None,
            coins_used: Vec::new(),
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!("dp[0] = 0, amounts 1..={} unreachable so far", amount),
            state.clone(),
        );

        for a in 1..=amount {
            state.current_amount = Some(a);
            state.current_coin = None;
            rec.record_with(
                StepKind::Consider,
                format!("Fewest coins for amount {}", a),
                state.clone(),
                vec![a],
            );
            for &coin in &self.coins {
                if coin > a {
                    continue;
                }
                state.current_coin = Some(coin);
                let candidate = state.table[a - coin].map(|c| c + 1);
                rec.record_with(
                    StepKind::Compare,
                    format!(
                        "Coin {}: dp[{}] + 1 = {} vs dp[{}] = {}",
                        coin,
                        a - coin,
                        fmt_cell(candidate),
                        a,
                        fmt_cell(state.table[a])
                    ),
                    state.clone(),
                    vec![a, a - coin],
                );
                let improved = match (candidate, state.table[a]) {
                    (Some(c), Some(d)) => c < d,
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                let description = if improved {
                    state.table[a] = candidate;
                    state.last_coin[a] = Some(coin);
                    format!("dp[{}] = {} using coin {}", a, fmt_cell(candidate), coin)
                } else {
                    format!("dp[{}] stays {}", a, fmt_cell(state.table[a]))
                };
                rec.record_with(
                    StepKind::Update { changed: improved },
                    description,
                    state.clone(),
                    vec![a],
                );
            }
        }

        state.current_coin = None;
        match state.table[amount] {
            Some(count) => {
                let mut remaining = amount;
                while let Some(coin) = state.last_coin[remaining] {
                    state.current_amount = Some(remaining);
                    state.current_coin = Some(coin);
                    state.coins_used.push(coin);
                    rec.record_with(
                        StepKind::Backtrack,
                        format!("Amount {} used coin {}, {} left", remaining, coin, remaining - coin),
                        state.clone(),
                        vec![remaining],
                    );
                    remaining -= coin;
                }
                state.current_amount = None;
                state.current_coin = None;
                state.result = Some(count as i64);
                let description = format!("{} coins: {:?}", count, state.coins_used);
                rec.complete(Outcome::Solved, description, state);
            }
            None => {
                state.current_amount = None;
                state.result = Some(-1);
                let description = format!("Amount {} cannot be made from {:?}: -1", amount, self.coins);
                rec.complete(Outcome::Unreachable, description, state);
            }
        }
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
    fn demo_needs_three_coins() {
        let trace = CoinChange::default().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.data.result, Some(3));
        assert_eq!(last.data.coins_used.iter().sum::<usize>(), DEMO_AMOUNT);
        assert_eq!(last.data.coins_used.len(), 3);
        assert_eq!(trace[0].data.table[0], Some(0));
    }

    #[test]
    fn unreachable_amount_reports_minus_one() {
        let trace = CoinChange::new(vec![2], 3).unwrap().generate_steps();
        let last = trace.last().unwrap();
        assert_eq!(last.kind.outcome(), Some(Outcome::Unreachable));
        assert_eq!(last.data.result, Some(-1));
        assert_eq!(last.data.table[3], None);
    }

    #[test]
    fn zero_amount_needs_no_coins() {
        let trace = CoinChange::new(vec![1, 2], 0).unwrap().generate_steps();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().data.result, Some(0));
    }

    #[test]
    fn zero_coin_is_rejected() {
        assert!(CoinChange::new(vec![0, 1], 3).is_err());
    }
}
