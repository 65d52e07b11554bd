//! Searching trace generators.
//!
//! Both searches reuse [`ArrayState`]: `comparing` holds the probed index and
//! `sorted` marks the found index in the terminal step.

pub mod binary;
pub mod linear;

pub use binary::BinarySearch;
pub use linear::LinearSearch;

use algotrace_core::{ArrayState, Outcome, Trace};

/// Target used when none is supplied.
pub const DEMO_TARGET: i64 = 22;

/// Index reported by the terminal step of a search trace, if any.
pub fn found_index(trace: &Trace<ArrayState>) -> Option<usize> {
    match trace.last()?.kind.outcome()? {
        Outcome::Found { index } => Some(index),
        _ => None,
    }
}
