//! Error taxonomy for the trace core.
//!
//! Three categories, surfaced loudly and never downgraded: a missing
//! step in a decision trail is worse than a visible error.

use thiserror::Error;

/// All trace recorder errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Referenced execution does not exist.
    #[error("execution not found: {0}")]
    NotFound(String),

    /// Caller violated the execution state machine (append or complete
    /// on a terminal execution). A caller bug, never retried.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Underlying persistence failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for trace operations.
pub type Result<T> = std::result::Result<T, TraceError>;

impl TraceError {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TraceError::NotFound(_))
    }

    /// Check if this is a state-machine violation.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, TraceError::InvalidState(_))
    }
}
