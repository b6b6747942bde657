//! Scripted game tree for search tests
//!
//! Every node has `branching` children and nothing is ever terminal. Player
//! one's mobility at a node is `values(path)` and player two's is zero, so the
//! baseline heuristic scores a cut-off node for player one as exactly
//! `values(path)`.

use crate::game::GameState;
use crate::types::{PlayerId, Score};

#[derive(Clone)]
pub(crate) struct Scripted {
    pub path: Vec<u8>,
    pub branching: u8,
    pub values: fn(&[u8]) -> usize,
}

impl Scripted {
    pub fn new(branching: u8, values: fn(&[u8]) -> usize) -> Self {
        Scripted {
            path: Vec::new(),
            branching,
            values,
        }
    }
}

impl GameState for Scripted {
    type Action = u8;
    type Location = usize;

    fn actions(&self) -> Vec<u8> {
        (0..self.branching).collect()
    }

    fn result(&self, action: &u8) -> Self {
        let mut next = self.clone();
        next.path.push(*action);
        next
    }

    fn terminal_test(&self) -> bool {
        false
    }

    fn utility(&self, _player: PlayerId) -> Score {
        0.0
    }

    fn location_of(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::One => (self.values)(&self.path),
            PlayerId::Two => 0,
        }
    }

    fn liberties(&self, location: &usize) -> Vec<usize> {
        vec![0; *location]
    }

    fn active_player(&self) -> PlayerId {
        if self.path.len() % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    fn ply(&self) -> u32 {
        self.path.len() as u32
    }
}
