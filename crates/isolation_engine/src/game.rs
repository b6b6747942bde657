//! Game-state collaborator contract
//!
//! The search never inspects a board directly. Everything it needs from the
//! rules engine goes through [`GameState`]: legal actions, transitions,
//! terminal detection and utility, plus the location/liberty queries the
//! mobility heuristics are built on.
//!
//! Implementations are immutable values: `result` returns a fresh state and
//! leaves `self` untouched. A non-terminal state must offer at least one
//! action.

use crate::types::{PlayerId, Score};
use std::fmt::Debug;

pub trait GameState: Clone {
    /// Opaque identifier of a legal action, compared by equality only
    type Action: Clone + PartialEq + Debug;

    /// Where a player stands (may encode "not yet placed")
    type Location;

    /// Legal actions for the player to move
    fn actions(&self) -> Vec<Self::Action>;

    /// State reached by playing `action`
    fn result(&self, action: &Self::Action) -> Self;

    /// True once the player to move has no legal action
    fn terminal_test(&self) -> bool;

    /// Exact outcome for `player`: +1 win, -1 loss, 0 when not terminal
    fn utility(&self, player: PlayerId) -> Score;

    fn location_of(&self, player: PlayerId) -> Self::Location;

    /// Legal destinations from `location`
    fn liberties(&self, location: &Self::Location) -> Vec<Self::Location>;

    /// Player whose turn it is
    fn active_player(&self) -> PlayerId;

    /// Number of actions played so far
    fn ply(&self) -> u32;

    /// Size of `player`'s liberty set
    fn mobility(&self, player: PlayerId) -> usize {
        self.liberties(&self.location_of(player)).len()
    }
}
