//! Trace generators for every algorithm in the catalogue, plus the registry
//! that selects them and the contracts that verify their output.

pub mod contracts;
pub mod dp;
pub mod error;
pub mod graph;
pub mod registry;
pub mod searching;
pub mod sorting;

// Re-export commonly used types
pub use error::EngineError;
pub use registry::{build, catalogue, generate, info, DynTraceGenerator, TraceBundle, TraceRequest};
