//! GraphError: unified error type for the public APIs of this crate.
//!
//! Every fallible operation in the crate reports through this enum so
//! callers get robust, non-panicking error handling. Degenerate graph
//! sizes (`n = 0, 1, 2`) are first-class inputs, never errors.

use thiserror::Error;

/// Unified error type for graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph contains a cycle where a DAG was required
    /// (e.g. topological sorting).
    #[error("cycle detected in graph (expected a DAG)")]
    CycleDetected,
    /// An auxiliary array keyed by vertex index has the wrong length.
    #[error("auxiliary array length {found} does not match vertex count {expected}")]
    AuxLenMismatch {
        /// The model's vertex count.
        expected: usize,
        /// The length of the array the caller supplied.
        found: usize,
    },
}
