//! Dynamic-programming trace generators.
//!
//! Every generator seeds its table with base cases in the `Init` step, then
//! walks the fill loop recording `Consider` when a cell or call is entered,
//! `Compare`/`Decide` for the reads that drive the choice, and
//! `Update { changed }` for each write or rejected relaxation. Generators
//! that recover a solution (items, subsequence, edit script, coins,
//! partition) finish with `Backtrack` steps before `Complete`.
//!
//! Each payload owns a copy of its table so steps never alias one another.

pub mod coin_change;
pub mod edit_distance;
pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod matrix_chain;
pub mod palindrome;

pub use coin_change::CoinChange;
pub use edit_distance::{EditDistance, EditOperation};
pub use fibonacci::{Fibonacci, FibonacciMode};
pub use knapsack::Knapsack;
pub use lcs::LongestCommonSubsequence;
pub use lis::LongestIncreasingSubsequence;
pub use matrix_chain::MatrixChainMultiplication;
pub use palindrome::PalindromePartitioning;

/// Row-major 2-D table.
pub type Table<T> = Vec<Vec<T>>;

/// Renders a table cell that may be unset or unreachable.
pub(crate) fn fmt_cell<T: std::fmt::Display>(cell: Option<T>) -> String {
    match cell {
        Some(v) => v.to_string(),
        None => "∞".to_string(),
    }
}
