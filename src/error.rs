//! Selection and input error types.
//!
//! Every failure mode has a named variant.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Cannot select from an empty input")]
    EmptyInput,

    #[error("Invalid rank {k}: must be between 1 and {len}")]
    InvalidRank { k: i128, len: usize },
}

/// Result type alias for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid integer {token:?} at position {position}")]
    InvalidInteger { token: String, position: usize },

    #[error("Invalid JSON array: {0}")]
    Json(#[from] serde_json::Error),
}
