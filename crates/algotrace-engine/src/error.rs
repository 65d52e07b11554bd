//! Engine error types.
//!
//! [`EngineError`] covers everything that can go wrong before a trace is
//! generated: unknown ids, malformed parameters, inputs a generator cannot
//! accept. Once a generator is built, trace generation itself cannot fail.

use algotrace_core::{AlgorithmId, CoreError};

/// Errors raised while selecting or configuring a generator.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The `params` object did not match the generator's parameter struct.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// A required request field was absent.
    #[error("{algorithm} requires {field}")]
    MissingInput {
        algorithm: AlgorithmId,
        field: &'static str,
    },

    /// A step payload could not be converted to JSON.
    #[error("failed to serialize step {step}: {message}")]
    Serialization { step: u32, message: String },
}
