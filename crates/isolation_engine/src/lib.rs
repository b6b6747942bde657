//! Time-bounded adversarial search for Knights Isolation
//!
//! The crate is organised around the agent's turn:
//!
//! - [`api::SearchAgent`] writes a fallback move, opens the turn in its
//!   [`search::SearchContext`] and runs iterative deepening;
//! - [`search::AlphaBetaEngine`] searches one depth, scoring cutoff nodes with
//!   an [`evaluation::Heuristic`] and reporting each root improvement;
//! - [`search::MoveReporter`] holds the best move so far for whoever enforces
//!   the deadline.
//!
//! The rules engine is reached only through [`game::GameState`];
//! [`isolation::Isolation`] is the implementation shipped with the crate.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod isolation;
pub mod search;
pub mod types;

pub use api::{Agent, RandomAgent, SearchAgent};
pub use config::AgentConfig;
pub use error::{EngineError, EngineResult};
pub use game::GameState;
pub use types::{PlayerId, Score};
