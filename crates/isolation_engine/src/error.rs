//! Error types for the isolation engine
//!
//! Provides custom error types for engine operations: search entry points,
//! context persistence and agent configuration.

use thiserror::Error;

/// Errors that can occur in the isolation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Search was asked to move in a position with no legal action
    #[error("No legal actions available at ply {ply}")]
    NoLegalActions { ply: u32 },

    /// Depth-bounded search needs at least one ply and a bounded horizon
    #[error("Invalid search depth: {depth} (must be between 1 and {max})", max = crate::constants::MAX_SEARCH_DEPTH)]
    InvalidDepth { depth: u32 },

    /// Search context or configuration JSON could not be encoded or decoded
    #[error("JSON codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
