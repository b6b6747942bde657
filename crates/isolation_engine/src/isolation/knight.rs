//! Knight jump tables
//!
//! Every player moves like a chess knight: 2 squares in one direction, then 1
//! square perpendicular. Jumps ignore whatever lies in between; only the
//! destination has to be open.
//!
//! The destinations of each square are precomputed at compile time as a
//! bitmask, so generating liberties is a mask-and-scan over the open squares.

use super::square::Square;
use crate::constants::{BOARD_HEIGHT, BOARD_SQUARES, BOARD_WIDTH, KNIGHT_OFFSETS};

const fn build_knight_masks() -> [u128; BOARD_SQUARES] {
    let mut masks = [0u128; BOARD_SQUARES];
    let mut index = 0;
    while index < BOARD_SQUARES {
        let col = (index % BOARD_WIDTH as usize) as i16;
        let row = (index / BOARD_WIDTH as usize) as i16;
        let mut k = 0;
        while k < KNIGHT_OFFSETS.len() {
            let c = col + KNIGHT_OFFSETS[k].0 as i16;
            let r = row + KNIGHT_OFFSETS[k].1 as i16;
            if c >= 0 && r >= 0 && c < BOARD_WIDTH as i16 && r < BOARD_HEIGHT as i16 {
                masks[index] |= 1u128 << (r as usize * BOARD_WIDTH as usize + c as usize);
            }
            k += 1;
        }
        index += 1;
    }
    masks
}

static KNIGHT_MASKS: [u128; BOARD_SQUARES] = build_knight_masks();

/// Every square a knight could reach from `from` on an empty board
pub fn knight_mask(from: Square) -> u128 {
    KNIGHT_MASKS[from.index()]
}

/// Squares set in `mask`, in ascending index order
pub(crate) fn squares_in(mut mask: u128) -> Vec<Square> {
    let mut squares = Vec::with_capacity(mask.count_ones() as usize);
    while mask != 0 {
        let index = mask.trailing_zeros() as usize;
        // index < BOARD_SQUARES because masks never set bits past the board
        squares.extend(Square::from_index(index));
        mask &= mask - 1;
    }
    squares
}

/// Open knight destinations from `from` given the blocked-square mask
pub fn generate_knight_moves(blocked: u128, from: Square) -> Vec<Square> {
    squares_in(knight_mask(from) & !blocked)
}
