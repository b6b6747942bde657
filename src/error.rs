//! Error types for the match harness
//!
//! Provides custom error types for running games: engine failures surfaced by
//! agents, settings file problems and bad agent specifications.

use isolation_engine::EngineError;
use thiserror::Error;

/// Errors that can occur while running matches
#[derive(Error, Debug)]
pub enum HarnessError {
    /// An agent or the engine failed
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Agent specification could not be understood
    #[error("Unknown agent '{spec}' (expected 'random', a heuristic id or a heuristic name)")]
    InvalidAgent { spec: String },

    /// Match settings are out of range
    #[error("Invalid match settings: {message}")]
    InvalidSettings { message: String },
}

/// Result type alias for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
