//! Position evaluation with mobility heuristics
//!
//! Evaluates positions by comparing how many squares each knight can still
//! reach, optionally switching weights as the game progresses.
//!
//! ## Module Organization
//!
//! - `mobility` - Weighted mobility difference primitive
//! - `phase` - Game phase from round counter
//! - `heuristic` - Id-addressed heuristic catalog

mod heuristic;
mod mobility;
mod phase;

pub use heuristic::{Heuristic, SelectedHeuristic, CATALOG, FALLBACK_HEURISTIC_ID};
pub use mobility::{Shape, Weights};
pub use phase::{game_phase, progress, Phase};
