//! Core value types shared by the search, the heuristics and the board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimax value of a position from the searching player's point of view
pub type Score = f64;

/// One of the two seats at the board
///
/// `One` always moves first. Seats are compared by identity only; the
/// numeric index exists for tables indexed by player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player tables (0 or 1)
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Seat for a table index, `None` for anything but 0 or 1
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerId::One),
            1 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Which side of the minimax recursion a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Searching player to move: keep the running maximum
    Max,
    /// Opponent to move: keep the running minimum
    Min,
}

impl Layer {
    pub fn flip(self) -> Self {
        match self {
            Layer::Max => Layer::Min,
            Layer::Min => Layer::Max,
        }
    }

    /// Starting value of the running best before any child is seen
    pub fn identity(self) -> Score {
        match self {
            Layer::Max => Score::NEG_INFINITY,
            Layer::Min => Score::INFINITY,
        }
    }
}
