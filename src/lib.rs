//! Knights Isolation match runner
//!
//! Wraps the `isolation_engine` agents in a harness that enforces the per-move
//! time limit, carries search contexts between turns and tallies matches.

pub mod cli;
pub mod error;
pub mod harness;
pub mod settings;

pub use error::{HarnessError, HarnessResult};
pub use harness::{play_game, run_match, run_with_deadline, Forfeit, GameRecord, MatchSummary};
pub use settings::{AgentSpec, MatchConfig, Settings};
