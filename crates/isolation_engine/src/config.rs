//! Agent configuration
//!
//! Everything an agent needs at construction. Missing fields in a JSON file
//! take their defaults, so `{}` is a valid configuration.

use crate::constants::{DEFAULT_AVERAGE_GAME_LENGTH, DEFAULT_MAX_DEPTH, DEFAULT_YIELD_SLICE, MAX_SEARCH_DEPTH};
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Heuristic catalog id; unknown ids fall back to the last entry
    pub heuristic: u32,
    /// Deepest iterative-deepening pass
    pub max_depth: u32,
    /// Expected rounds per game, for phase-adaptive heuristics
    pub average_game_length: f64,
    /// Milliseconds of uninterrupted search between cooperative yields
    pub yield_slice_ms: u64,
    /// Seed for the fallback move picker; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            heuristic: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            average_game_length: DEFAULT_AVERAGE_GAME_LENGTH,
            yield_slice_ms: DEFAULT_YIELD_SLICE.as_millis() as u64,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn with_heuristic(heuristic: u32) -> Self {
        AgentConfig {
            heuristic,
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> EngineResult<Self> {
        let config: AgentConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.average_game_length.is_finite() && self.average_game_length > 0.0) {
            return Err(EngineError::Config {
                message: format!(
                    "average_game_length must be positive, got {}",
                    self.average_game_length
                ),
            });
        }
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(EngineError::Config {
                message: format!("max_depth must be at most {MAX_SEARCH_DEPTH}, got {}", self.max_depth),
            });
        }
        Ok(())
    }

    pub fn yield_slice(&self) -> Duration {
        Duration::from_millis(self.yield_slice_ms)
    }
}
