//! Matrix chain multiplication order.
//!
//! Interval DP over chain length. The parenthesization of every interval is
//! kept in a table of strings beside the cost table, so the terminal step can
//! show the optimal grouping without a separate recovery pass.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

use super::{fmt_cell, Table};

/// `(rows, cols)` of each matrix in the demonstration chain.
pub const DEMO_DIMENSIONS: [(u64, u64); 4] = [(40, 20), (20, 30), (30, 10), (10, 30)];

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::MatrixChainMultiplication,
    name: "Matrix Chain Multiplication",
    category: Category::DynamicProgramming,
    description: "Finds the parenthesization of a matrix product that minimizes scalar \
                  multiplications by solving every sub-chain from shortest to longest.",
    time_complexity: "O(n^3)",
    space_complexity: "O(n^2)",
    difficulty: Difficulty::Hard,
    reference_code: "\
dp[i][i] = 0
for len in 2..=n:
    for i in 0..=n-len:
        j = i + len - 1; dp[i][j] = inf
        for k in i..j:
            cost = dp[i][k] + dp[k+1][j] + rows[i] * cols[k] * cols[j]
            dp[i][j] = min(dp[i][j], cost)",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixChainState {
    pub dimensions: Vec<(u64, u64)>,
    /// Minimum multiplications per interval, `None` until computed.
    pub table: Table<Option<u64>>,
    /// Best split point per interval.
    pub split: Table<Option<usize>>,
    /// Optimal grouping per interval, e.g. `(A1(A2A3))`.
    pub parens: Table<String>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    pub k: Option<usize>,
    pub result: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixChainMultiplication {
    dimensions: Vec<(u64, u64)>,
}

impl MatrixChainMultiplication {
    /// Rejects an empty chain, adjacent matrices whose inner dimensions
    /// differ, and chains whose worst-case cost overflows `u64`.
    pub fn new(dimensions: Vec<(u64, u64)>) -> Result<Self, CoreError> {
        if dimensions.is_empty() {
            return Err(CoreError::InvalidInput {
                reason: "matrix chain needs at least one matrix".to_string(),
            });
        }
        for (index, pair) in dimensions.windows(2).enumerate() {
            if pair[0].1 != pair[1].0 {
                return Err(CoreError::InvalidInput {
                    reason: format!(
                        "matrix {} is {}x{} but matrix {} is {}x{}",
                        index + 1,
                        pair[0].0,
                        pair[0].1,
                        index + 2,
                        pair[1].0,
                        pair[1].1
                    ),
                });
            }
        }
        // Any grouping costs at most (n - 1) products of three dimensions.
        let largest = dimensions
            .iter()
            .map(|&(rows, cols)| rows.max(cols))
            .max()
            .unwrap_or_default();
        let bound = largest
            .checked_mul(largest)
            .and_then(|sq| sq.checked_mul(largest))
            .and_then(|cube| cube.checked_mul(dimensions.len() as u64 - 1));
        if bound.is_none() {
            return Err(CoreError::InvalidInput {
                reason: format!(
                    "matrix chain dimensions up to {} can overflow the cost table",
                    largest
                ),
            });
        }
        Ok(MatrixChainMultiplication { dimensions })
    }
}

impl Default for MatrixChainMultiplication {
    fn default() -> Self {
        MatrixChainMultiplication {
            dimensions: DEMO_DIMENSIONS.to_vec(),
        }
    }
}

impl TraceGenerator for MatrixChainMultiplication {
    type State = MatrixChainState;

    fn generate_steps(&self) -> Trace<MatrixChainState> {
        let dims = &self.dimensions;
        let n = dims.len();
        let mut table = vec![vec![None; n]; n];
        let mut parens = vec![vec![String::new(); n]; n];
        for i in 0..n {
            table[i][i] = Some(0);
            parens[i][i] = format!("A{}", i + 1);
        }
        let mut rec = TraceRecorder::new();
        let mut state = MatrixChainState {
            dimensions: dims.clone(),
            table,
            split: vec![vec![None; n]; n],
            parens,
            i: None,
            j: None,
            k: None,
            result: None,
        };
        rec.record(
            StepKind::Init,
            format!("{} matrices; a single matrix costs 0", n),
            state.clone(),
        );

        for len in 2..=n {
            for i in 0..=n - len {
                let j = i + len - 1;
                state.i = Some(i);
                state.j = Some(j);
                state.k = None;
                rec.record_with(
                    StepKind::Consider,
                    format!("Best order for A{}..A{}", i + 1, j + 1),
                    state.clone(),
                    vec![i, j],
                );
                for k in i..j {
                    state.k = Some(k);
                    let left = state.table[i][k].unwrap_or_default();
                    let right = state.table[k + 1][j].unwrap_or_default();
                    let cost = left + right + dims[i].0 * dims[k].1 * dims[j].1;
                    rec.record_with(
                        StepKind::Compare,
                        format!(
                            "Split after A{}: {} + {} + {}*{}*{} = {} vs {}",
                            k + 1,
                            left,
                            right,
                            dims[i].0,
                            dims[k].1,
                            dims[j].1,
                            cost,
                            fmt_cell(state.table[i][j])
                        ),
                        state.clone(),
                        vec![i, k, j],
                    );
                    let improved = state.table[i][j].map_or(true, |best| cost < best);
                    let description = if improved {
                        state.table[i][j] = Some(cost);
                        state.split[i][j] = Some(k);
                        state.parens[i][j] =
                            format!("({}{})", state.parens[i][k], state.parens[k + 1][j]);
                        format!("dp[{}][{}] = {} as {}", i, j, cost, state.parens[i][j])
                    } else {
                        format!("dp[{}][{}] stays {}", i, j, fmt_cell(state.table[i][j]))
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

        let best = state.table[0][n - 1].unwrap_or_default();
        state.i = None;
        state.j = None;
        state.k = None;
        state.result = Some(best);
        let description = format!(
            "Minimum {} multiplications with {}",
            best,
            state.parens[0][n - 1]
        );
        rec.complete(Outcome::Solved, description, state);
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
