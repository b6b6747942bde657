//! Weighted mobility difference
//!
//! `score = delta * f(own) - gamma * f(opp)` where `own`/`opp` are the sizes
//! of each player's liberty set and `f` is the identity or the square.

use crate::game::GameState;
use crate::types::{PlayerId, Score};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Linear,
    Squared,
}

impl Shape {
    fn apply(self, mobility: usize) -> Score {
        let m = mobility as Score;
        match self {
            Shape::Linear => m,
            Shape::Squared => m * m,
        }
    }
}

/// Weights of the mobility difference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Weight on the searching player's own mobility
    pub delta: Score,
    /// Weight on the opponent's mobility
    pub gamma: Score,
    pub shape: Shape,
}

impl Weights {
    pub const fn linear(delta: Score, gamma: Score) -> Self {
        Weights {
            delta,
            gamma,
            shape: Shape::Linear,
        }
    }

    pub const fn squared(delta: Score, gamma: Score) -> Self {
        Weights {
            delta,
            gamma,
            shape: Shape::Squared,
        }
    }

    /// Score from precomputed mobility counts
    pub fn score(&self, own_mobility: usize, opp_mobility: usize) -> Score {
        self.delta * self.shape.apply(own_mobility) - self.gamma * self.shape.apply(opp_mobility)
    }

    /// Evaluate `state` for `player`
    pub fn evaluate<S: GameState>(&self, state: &S, player: PlayerId) -> Score {
        self.score(state.mobility(player), state.mobility(player.opponent()))
    }

    /// Favors own mobility over suppressing the opponent's
    pub fn is_defensive(&self) -> bool {
        self.delta > self.gamma
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self.shape {
            Shape::Linear => "linear",
            Shape::Squared => "squared",
        };
        write!(f, "{shape} {}/{}", self.delta, self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_difference() {
        let weights = Weights::linear(1.0, 2.0);
        assert_eq!(weights.score(3, 2), -1.0);
    }

    #[test]
    fn test_squared_difference() {
        let weights = Weights::squared(1.0, 1.5);
        assert_eq!(weights.score(3, 2), 3.0);
    }

    #[test]
    fn test_balanced_is_zero_on_equal_mobility() {
        assert_eq!(Weights::linear(1.0, 1.0).score(5, 5), 0.0);
        assert_eq!(Weights::squared(1.0, 1.0).score(4, 4), 0.0);
    }

    #[test]
    fn test_defensive_classification() {
        assert!(Weights::linear(2.0, 1.0).is_defensive());
        assert!(!Weights::linear(1.0, 1.0).is_defensive());
        assert!(!Weights::squared(1.0, 1.5).is_defensive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Weights::linear(1.0, 2.0).to_string(), "linear 1/2");
        assert_eq!(Weights::squared(1.0, 1.5).to_string(), "squared 1/1.5");
    }
}
