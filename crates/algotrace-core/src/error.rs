//! Core error types for algotrace-core.
//!
//! Uses `thiserror` for structured, matchable error variants. These cover
//! programming-contract violations only: unknown algorithm names and
//! malformed demonstration inputs. Unreachable results and structural graph
//! anomalies are trace data, never errors.

use thiserror::Error;

/// Core errors produced by the algotrace-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No algorithm is registered under this name.
    #[error("unknown algorithm: '{name}'")]
    UnknownAlgorithm { name: String },

    /// An edge or start vertex refers to a vertex outside the graph.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A graph description is structurally invalid (e.g. non-square matrix).
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// A demonstration parameter is outside what the algorithm accepts.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
