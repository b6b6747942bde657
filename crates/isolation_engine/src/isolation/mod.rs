//! Knights Isolation rules
//!
//! Reference implementation of the [`GameState`](crate::game::GameState)
//! collaborator used by the match harness, the benchmarks and the tests.
//!
//! ## Module Organization
//!
//! - `square` - Board coordinates and algebraic notation
//! - `knight` - Precomputed knight jump masks
//! - `board` - Position value and rules

mod board;
mod knight;
mod square;

pub use board::Isolation;
pub use knight::{generate_knight_moves, knight_mask};
pub use square::Square;
