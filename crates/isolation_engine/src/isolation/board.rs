//! Knights Isolation position
//!
//! Two players share an 11x9 board. On their first turn each player places
//! their knight on any open square; afterwards they must jump like a chess
//! knight to an open square. Every square a knight lands on stays blocked for
//! the rest of the game. The player to move with no open destination loses.
//!
//! Positions are small `Copy`-cheap values: a 128-bit mask of blocked squares,
//! both knight locations and the ply counter.

use super::knight::{generate_knight_moves, squares_in};
use super::square::Square;
use crate::constants::{BOARD_HEIGHT, BOARD_SQUARES, BOARD_WIDTH, LOSS_SCORE, WIN_SCORE};
use crate::game::GameState;
use crate::types::{PlayerId, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

const BOARD_MASK: u128 = (1u128 << BOARD_SQUARES) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isolation {
    blocked: u128,
    locations: [Option<Square>; 2],
    ply: u32,
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Isolation {
    /// Empty board, nobody placed yet, player one to move
    pub fn new() -> Self {
        Isolation {
            blocked: 0,
            locations: [None, None],
            ply: 0,
        }
    }

    /// Empty board with the given squares blocked before the first move
    pub fn with_blocked_squares<I>(squares: I) -> Self
    where
        I: IntoIterator<Item = Square>,
    {
        let blocked = squares.into_iter().fold(0u128, |mask, sq| mask | sq.bit());
        Isolation {
            blocked,
            ..Self::new()
        }
    }

    /// Empty board with `count` randomly chosen squares blocked
    pub fn with_random_blocks<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut squares = squares_in(BOARD_MASK);
        squares.shuffle(rng);
        squares.truncate(count.min(BOARD_SQUARES));
        Self::with_blocked_squares(squares)
    }

    /// Position after both players placed their knights on an empty board
    pub fn with_placements(one: Square, two: Square) -> Self {
        Self::new().result(&one).result(&two)
    }

    /// Copy of this position with `square` additionally blocked
    pub fn block(&self, square: Square) -> Self {
        Isolation {
            blocked: self.blocked | square.bit(),
            ..*self
        }
    }

    pub fn is_open(&self, square: Square) -> bool {
        self.blocked & square.bit() == 0
    }

    /// All open squares in ascending order
    pub fn open_squares(&self) -> Vec<Square> {
        squares_in(!self.blocked & BOARD_MASK)
    }

    pub fn open_count(&self) -> usize {
        (!self.blocked & BOARD_MASK).count_ones() as usize
    }

    /// Squares a knight at `location` may move to next
    fn destinations(&self, location: Option<Square>) -> Vec<Square> {
        match location {
            Some(from) => generate_knight_moves(self.blocked, from),
            None => self.open_squares(),
        }
    }
}

impl GameState for Isolation {
    type Action = Square;
    type Location = Option<Square>;

    fn actions(&self) -> Vec<Square> {
        self.destinations(self.location_of(self.active_player()))
    }

    fn result(&self, action: &Square) -> Self {
        debug_assert!(self.is_open(*action), "{action} is already blocked");
        let mut next = *self;
        next.blocked |= action.bit();
        next.locations[self.active_player().index()] = Some(*action);
        next.ply += 1;
        next
    }

    fn terminal_test(&self) -> bool {
        self.actions().is_empty()
    }

    fn utility(&self, player: PlayerId) -> Score {
        if !self.terminal_test() {
            return 0.0;
        }
        if player == self.active_player() {
            LOSS_SCORE
        } else {
            WIN_SCORE
        }
    }

    fn location_of(&self, player: PlayerId) -> Option<Square> {
        self.locations[player.index()]
    }

    fn liberties(&self, location: &Option<Square>) -> Vec<Option<Square>> {
        self.destinations(*location).into_iter().map(Some).collect()
    }

    fn active_player(&self) -> PlayerId {
        if self.ply % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    fn ply(&self) -> u32 {
        self.ply
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_HEIGHT as i16).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_WIDTH as i16 {
                let Some(square) = Square::new(col, row) else {
                    continue;
                };
                let glyph = if self.locations[0] == Some(square) {
                    '1'
                } else if self.locations[1] == Some(square) {
                    '2'
                } else if self.is_open(square) {
                    '.'
                } else {
                    '#'
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..BOARD_WIDTH {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(col: i16, row: i16) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn test_opening_offers_every_square() {
        let state = Isolation::new();
        assert_eq!(state.active_player(), PlayerId::One);
        assert_eq!(state.actions().len(), BOARD_SQUARES);
        assert!(!state.terminal_test());
        assert_eq!(state.utility(PlayerId::One), 0.0);
    }

    #[test]
    fn test_second_placement_excludes_first_square() {
        let state = Isolation::new().result(&sq(5, 4));
        assert_eq!(state.active_player(), PlayerId::Two);
        let actions = state.actions();
        assert_eq!(actions.len(), BOARD_SQUARES - 1);
        assert!(!actions.contains(&sq(5, 4)));
    }

    #[test]
    fn test_knight_moves_after_placement() {
        let state = Isolation::with_placements(sq(5, 4), sq(0, 0));
        assert_eq!(state.active_player(), PlayerId::One);
        assert_eq!(state.ply(), 2);
        assert_eq!(state.actions().len(), 8);
        assert_eq!(state.mobility(PlayerId::Two), 2);
    }

    #[test]
    fn test_actions_match_liberties_of_the_mover() {
        for state in [Isolation::new(), Isolation::with_placements(sq(5, 4), sq(0, 0))] {
            let mover = state.location_of(state.active_player());
            let liberties: Vec<Square> = state.liberties(&mover).into_iter().flatten().collect();
            assert_eq!(state.actions(), liberties);
        }
        let corner = Isolation::with_placements(sq(5, 4), sq(0, 0));
        assert_eq!(corner.liberties(&Some(sq(0, 0))), vec![Some(sq(2, 1)), Some(sq(1, 2))]);
    }

    #[test]
    fn test_visited_squares_stay_blocked() {
        let start = Isolation::with_placements(sq(5, 4), sq(0, 0));
        let after = start.result(&sq(6, 6));
        assert!(!after.is_open(sq(5, 4)));
        assert!(!after.is_open(sq(6, 6)));
        assert_eq!(after.location_of(PlayerId::One), Some(sq(6, 6)));
        // The knight cannot jump back to where it came from
        let back = after.result(&sq(1, 2)).actions();
        assert!(!back.contains(&sq(5, 4)));
    }

    #[test]
    fn test_trapped_player_loses() {
        let state = Isolation::with_placements(sq(5, 4), sq(0, 0));
        // Player two in the corner only has b3 and c2; block both.
        let state = state.block(sq(1, 2)).block(sq(2, 1));
        let state = state.result(&sq(6, 6));
        assert!(state.terminal_test());
        assert_eq!(state.active_player(), PlayerId::Two);
        assert_eq!(state.utility(PlayerId::Two), LOSS_SCORE);
        assert_eq!(state.utility(PlayerId::One), WIN_SCORE);
    }

    #[test]
    fn test_random_blocks_are_reproducible() {
        let a = Isolation::with_random_blocks(10, &mut StdRng::seed_from_u64(7));
        let b = Isolation::with_random_blocks(10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.open_count(), BOARD_SQUARES - 10);
    }

    #[test]
    fn test_display_marks_players_and_blocks() {
        let state = Isolation::with_placements(sq(0, 0), sq(10, 8)).block(sq(5, 4));
        let rendered = state.to_string();
        assert!(rendered.contains('1'));
        assert!(rendered.contains('2'));
        assert!(rendered.contains('#'));
        assert_eq!(rendered.lines().count(), BOARD_HEIGHT as usize + 1);
    }
}
