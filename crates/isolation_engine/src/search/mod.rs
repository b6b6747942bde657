//! Alpha-beta search with iterative deepening
//!
//! This module implements the agent's search using:
//! - Alpha-beta pruning over min/max layers (explicit frame stack, no recursion)
//! - Iterative deepening for anytime answers
//! - A single-slot reporter the harness reads at its deadline
//! - A per-agent context that survives between turns
//!
//! ## Module Organization
//!
//! - `alphabeta` - Depth-bounded alpha-beta engine
//! - `iterative` - Iterative deepening driver
//! - `context` - Round counter and node-visit history
//! - `reporter` - Best-move-so-far register

mod alphabeta;
mod context;
mod iterative;
mod reporter;

pub use alphabeta::AlphaBetaEngine;
pub use context::SearchContext;
pub use iterative::{iterative_deepening, Deepening};
pub use reporter::MoveReporter;

#[cfg(test)]
pub(crate) mod scripted;
