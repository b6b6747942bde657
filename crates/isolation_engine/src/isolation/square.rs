//! Board coordinates
//!
//! Squares are numbered row-major from the bottom-left corner:
//! `index = row * BOARD_WIDTH + col`. They print as a column letter followed
//! by a 1-based row number (`a1` .. `k9`).

use crate::constants::{BOARD_HEIGHT, BOARD_SQUARES, BOARD_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Square at (`col`, `row`), `None` when off the board
    pub fn new(col: i16, row: i16) -> Option<Self> {
        if col < 0 || row < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
            return None;
        }
        Some(Square((row * BOARD_WIDTH as i16 + col) as u8))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SQUARES).then_some(Square(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    pub fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    pub(crate) fn bit(self) -> u128 {
        1u128 << self.0
    }

    /// Parse algebraic notation such as `c4`
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: i16 = chars.as_str().parse().ok()?;
        Square::new((file as u8 - b'a') as i16, rank - 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}
