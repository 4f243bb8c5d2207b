// file: src/error.rs
// version: 1.0.0
// guid: 7a42de91-c05b-4b8e-9f13-2e84a6b0cd55

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ProcvolError>;

/// Error types for the procvol utility
#[derive(Error, Debug)]
pub enum ProcvolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("process lookup failed: {0}")]
    ProcessLookupFailed(String),

    #[error("process not found: {0}")]
    ProcessNotFound(String),

    /// One reason per failed termination attempt, rendered one per line.
    #[error("termination failed:\n{}", .failures.join("\n"))]
    TerminationFailed { failures: Vec<String> },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("system error: {0}")]
    System(String),
}

impl ProcvolError {
    /// Create a new invalid arguments error
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new process lookup error
    pub fn process_lookup_failed(msg: impl Into<String>) -> Self {
        Self::ProcessLookupFailed(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}
