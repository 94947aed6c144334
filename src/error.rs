//! Error types for the move selector
//!
//! The search itself never fails: an empty move list and an exhausted time
//! budget are both defined outcomes. Errors only come from the boundary,
//! where a position string or a configuration has to be accepted.

use thiserror::Error;

/// Errors that can occur before a search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The rules engine rejected the position string
    #[error("Invalid FEN: {fen:?}")]
    InvalidFen { fen: String },

    /// A search configuration value is out of range
    #[error("Invalid search configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
