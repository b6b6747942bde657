//! Engine constants: board geometry, search defaults and heuristic tuning.

use std::time::Duration;

/// Number of columns on the Knights Isolation board
pub const BOARD_WIDTH: u8 = 11;

/// Number of rows on the Knights Isolation board
pub const BOARD_HEIGHT: u8 = 9;

/// Total number of squares
pub const BOARD_SQUARES: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Knight jump offsets as (column, row) deltas
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Deepest iteration the controller runs unless configured otherwise
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Deepest search an agent may be configured for
pub const MAX_SEARCH_DEPTH: u32 = 128;

/// First depth of every iterative-deepening pass
pub const MIN_ITERATION_DEPTH: u32 = 2;

/// Expected number of rounds per game, used to place a round in the game's arc
pub const DEFAULT_AVERAGE_GAME_LENGTH: f64 = 20.0;

/// Progress ratio at or below which phase-adaptive heuristics use their early weights
pub const PHASE_SPLIT: f64 = 0.5;

/// Terminal utility of a won position
pub const WIN_SCORE: f64 = 1.0;

/// Terminal utility of a lost position
pub const LOSS_SCORE: f64 = -1.0;

/// Node interval at which the search checks whether it should yield
pub const YIELD_CHECK_INTERVAL: u64 = 128;

/// Longest stretch of uninterrupted search before handing control back
pub const DEFAULT_YIELD_SLICE: Duration = Duration::from_millis(5);
