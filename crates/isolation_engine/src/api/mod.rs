//! Public API for the isolation engine
//!
//! Agents the harness can seat at the board.
//!
//! ## Module Organization
//!
//! - `agent` - The `Agent` trait and the random baseline
//! - `search_agent` - Iterative-deepening alpha-beta agent

mod agent;
mod search_agent;

pub use agent::{Agent, RandomAgent};
pub use search_agent::SearchAgent;
