//! Error types for MANUS
//!
//! The classification core itself never fails: every frame yields a
//! well-defined result, including the no-event outcome. Errors appear only
//! at the input-validation and session-bookkeeping boundaries.

use thiserror::Error;

/// Core MANUS errors
#[derive(Error, Debug)]
pub enum ManusError {
    #[error("Invalid landmark count: expected {expected}, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },

    #[error("Invalid symbol character: {0:?}")]
    InvalidSymbol(char),

    #[error("Session not started")]
    SessionNotStarted,

    #[error("Session already active")]
    SessionAlreadyActive,
}

/// Result type for MANUS operations
pub type ManusResult<T> = Result<T, ManusError>;
