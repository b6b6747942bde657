//! Match settings
//!
//! Loaded from an optional JSON file, then overridden by command-line flags.
//! Every field has a default, so a partial file (or none at all) works.
//!
//! ```json
//! {
//!   "match": { "time_limit_ms": 150, "games": 10, "blocked_squares": 0 },
//!   "first": { "kind": "search", "heuristic": 6, "max_depth": 8 },
//!   "second": { "kind": "random" }
//! }
//! ```

use crate::error::{HarnessError, HarnessResult};
use isolation_engine::evaluation::SelectedHeuristic;
use isolation_engine::isolation::Isolation;
use isolation_engine::{Agent, AgentConfig, RandomAgent, SearchAgent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default thinking time per move
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;

/// Default number of games per match
pub const DEFAULT_GAMES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Deadline per move, enforced by the harness
    pub time_limit_ms: u64,
    /// Games to play; seats alternate every game
    pub games: u32,
    /// Randomly blocked squares on each starting board
    pub blocked_squares: usize,
    /// Seed for boards and agents; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            games: DEFAULT_GAMES,
            blocked_squares: 0,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        if self.time_limit_ms == 0 {
            return Err(HarnessError::InvalidSettings {
                message: "time_limit_ms must be at least 1".to_string(),
            });
        }
        if self.blocked_squares > 60 {
            return Err(HarnessError::InvalidSettings {
                message: format!("blocked_squares {} leaves too little room to play", self.blocked_squares),
            });
        }
        Ok(())
    }
}

/// Who sits in a seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentSpec {
    Random,
    Search(AgentConfig),
}

impl AgentSpec {
    /// Fresh agent for one game; `seed` overrides the spec's own seed when set
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Agent<Isolation>> {
        match self {
            AgentSpec::Random => Box::new(RandomAgent::new(seed)),
            AgentSpec::Search(config) => {
                let mut config = config.clone();
                if seed.is_some() {
                    config.seed = seed;
                }
                Box::new(SearchAgent::new(config))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            AgentSpec::Random => "random".to_string(),
            AgentSpec::Search(config) => format!("alphabeta[{}]", SelectedHeuristic::from_id(config.heuristic)),
        }
    }
}

impl FromStr for AgentSpec {
    type Err = HarnessError;

    /// `random`, a heuristic id (`6`) or a heuristic name (`phase1`)
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("random") {
            return Ok(AgentSpec::Random);
        }
        if let Ok(id) = text.parse::<u32>() {
            return Ok(AgentSpec::Search(AgentConfig::with_heuristic(id)));
        }
        SelectedHeuristic::from_name(text)
            .map(|selected| AgentSpec::Search(AgentConfig::with_heuristic(selected.id)))
            .ok_or_else(|| HarnessError::InvalidAgent {
                spec: text.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    pub first: AgentSpec,
    pub second: AgentSpec,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            match_config: MatchConfig::default(),
            first: AgentSpec::Search(AgentConfig::with_heuristic(6)),
            second: AgentSpec::Search(AgentConfig::with_heuristic(0)),
        }
    }
}

impl Settings {
    pub fn from_json_str(text: &str) -> HarnessResult<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> HarnessResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        self.match_config.validate()?;
        for spec in [&self.first, &self.second] {
            if let AgentSpec::Search(config) = spec {
                config.validate()?;
            }
        }
        Ok(())
    }
}
