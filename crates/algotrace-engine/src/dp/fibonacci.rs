//! Fibonacci numbers, bottom-up or top-down.
//!
//! [`FibonacciMode::Tabulated`] fills `table[2..=n]` left to right.
//! [`FibonacciMode::Memoized`] recurses from `n`; a call whose value is
//! already in the table records `MemoHit` instead of recursing again.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, Category, CoreError, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use serde::{Deserialize, Serialize};

/// Largest `n` whose value and intermediate sums stay well inside `u64`.
pub const MAX_N: usize = 90;

pub const DEMO_N: usize = 10;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Fibonacci,
    name: "Fibonacci",
    category: Category::DynamicProgramming,
    description: "Computes F(n) = F(n-1) + F(n-2) either bottom-up from the base cases or \
                  top-down with a memo that turns the exponential recursion linear.",
    time_complexity: "O(n)",
    space_complexity: "O(n)",
    difficulty: Difficulty::Easy,
    reference_code: "\
// tabulated
dp[0] = 0; dp[1] = 1
for i in 2..=n: dp[i] = dp[i-1] + dp[i-2]

// memoized
fib(k): if memo[k] is set: return memo[k]
        memo[k] = fib(k-1) + fib(k-2); return memo[k]",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FibonacciMode {
    #[default]
    Tabulated,
    Memoized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciState {
    /// `None` = not computed yet.
    pub table: Vec<Option<u64>>,
    pub current: Option<usize>,
    /// Memoized mode: pending calls, outermost first.
    pub call_stack: Vec<usize>,
    pub result: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    n: usize,
    mode: FibonacciMode,
}

impl Fibonacci {
    /// Rejects `n > MAX_N`.
    pub fn new(n: usize, mode: FibonacciMode) -> Result<Self, CoreError> {
        if n > MAX_N {
            return Err(CoreError::InvalidInput {
                reason: format!("fibonacci n must be at most {}, got {}", MAX_N, n),
            });
        }
        Ok(Fibonacci { n, mode })
    }

    pub fn mode(&self) -> FibonacciMode {
        self.mode
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Fibonacci {
            n: DEMO_N,
            mode: FibonacciMode::Tabulated,
        }
    }
}

impl TraceGenerator for Fibonacci {
    type State = FibonacciState;

    fn generate_steps(&self) -> Trace<FibonacciState> {
        let mut state = FibonacciState {
            table: vec![None; self.n + 1],
            current: None,
            call_stack: Vec::new(),
            result: None,
        };
        state.table[0] = Some(0);
        if self.n >= 1 {
            state.table[1] = Some(1);
        }
        let mut rec = TraceRecorder::new();
        rec.record(
            StepKind::Init,
            format!("Base cases F(0) = 0, F(1) = 1; computing F({})", self.n),
            state.clone(),
        );

        let result = match self.mode {
            FibonacciMode::Tabulated => tabulate(self.n, &mut state, &mut rec),
            FibonacciMode::Memoized => memoize(self.n, &mut state, &mut rec),
        };

        state.current = None;
        state.result = Some(result);
        rec.complete(
            Outcome::Solved,
            format!("F({}) = {}", self.n, result),
            state,
        );
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

fn value(state: &FibonacciState, i: usize) -> u64 {
    state.table[i].unwrap_or_default()
}

fn tabulate(
    n: usize,
    state: &mut FibonacciState,
    rec: &mut TraceRecorder<FibonacciState>,
) -> u64 {
    for i in 2..=n {
        state.current = Some(i);
        rec.record_with(StepKind::Consider, format!("Computing F({})", i), state.clone(), vec![i]);

        let (a, b) = (value(state, i - 1), value(state, i - 2));
        rec.record_with(
            StepKind::Compare,
            format!("F({}) + F({}) = {} + {}", i - 1, i - 2, a, b),
            state.clone(),
            vec![i - 1, i - 2],
        );

        state.table[i] = Some(a + b);
        rec.record_with(
            StepKind::Update { changed: true },
            format!("F({}) = {}", i, a + b),
            state.clone(),
            vec![i],
        );
    }
    value(state, n)
}

fn memoize(k: usize, state: &mut FibonacciState, rec: &mut TraceRecorder<FibonacciState>) -> u64 {
    state.call_stack.push(k);
    state.current = Some(k);
    rec.record_with(StepKind::Consider, format!("Call fib({})", k), state.clone(), vec![k]);

    if let Some(known) = state.table[k] {
        rec.record_with(
            StepKind::MemoHit,
            format!("Memo hit: F({}) = {}", k, known),
            state.clone(),
            vec![k],
        );
        state.call_stack.pop();
        return known;
    }

    let a = memoize(k - 1, state, rec);
    let b = memoize(k - 2, state, rec);
    state.current = Some(k);
    rec.record_with(
        StepKind::Compare,
        format!("F({}) + F({}) = {} + {}", k - 1, k - 2, a, b),
        state.clone(),
        vec![k - 1, k - 2],
    );
    state.table[k] = Some(a + b);
    state.call_stack.pop();
    rec.record_with(
        StepKind::Update { changed: true },
        format!("Memoize F({}) = {}", k, a + b),
        state.clone(),
        vec![k],
    );
    a + b
}
