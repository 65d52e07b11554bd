//! Core data model for algorithm step traces.
//!
//! - [`step`]: the [`Step`] record, its [`StepKind`] tag set and the shared
//!   [`ArrayState`] payload of the sorting and searching families.
//! - [`trace`]: the [`TraceGenerator`] contract and the [`TraceRecorder`]
//!   every generator uses.
//! - [`info`]: static [`AlgorithmInfo`] descriptors.
//! - [`graph`]: the [`DemoGraph`] model behind the graph generators.
//! - [`id`]: [`StepId`] and the [`AlgorithmId`] catalogue.

pub mod error;
pub mod graph;
pub mod id;
pub mod info;
pub mod step;
pub mod trace;

// Re-export commonly used types
pub use error::CoreError;
pub use graph::{DemoGraph, WeightedEdge, MAX_WEIGHT};
pub use id::{AlgorithmId, StepId};
pub use info::{AlgorithmInfo, Category, Difficulty};
pub use step::{ArrayState, Decision, Outcome, Step, StepKind, Trace};
pub use trace::{TraceGenerator, TraceRecorder};
