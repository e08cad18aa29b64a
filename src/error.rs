//! Error types for chitra-fill.

use thiserror::Error;

/// Fill error type.
///
/// Every component classifies its own failures and wraps them with the
/// algorithm that was running; nothing is silently swallowed and no partial
/// raster is returned on failure. Geometry errors are deterministic, so
/// there is no retry path: callers fix the input instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// The caller supplied too few points to form a polygon.
    #[error("polygon requires at least 3 vertices, got {0}")]
    EmptyInput(usize),

    /// The requested algorithm name is not one of the known fill strategies.
    #[error("unknown fill algorithm {0:?} (expected scanline, rourke, fast or flood)")]
    InvalidAlgorithm(String),

    /// An algorithm failed mid-run (index out of raster bounds, collaborator
    /// contract violation, inconsistent coordinates).
    #[error("{algorithm} fill failed: {message}")]
    Execution {
        /// Which fill strategy was running.
        algorithm: &'static str,
        /// The originating condition.
        message: String,
    },
}

impl FillError {
    /// Shorthand for an execution failure inside a named algorithm.
    pub fn execution(algorithm: &'static str, message: impl Into<String>) -> Self {
        FillError::Execution {
            algorithm,
            message: message.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FillError>;
