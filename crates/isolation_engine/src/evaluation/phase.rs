//! Game phase estimation
//!
//! The agent's round counter divided by the expected game length places the
//! current turn in the arc of the game. Phase-adaptive heuristics switch
//! weights once that ratio passes [`PHASE_SPLIT`].

use crate::constants::PHASE_SPLIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Early,
    Late,
}

/// Fraction of an average game already played by round `round`
pub fn progress(round: u32, average_game_length: f64) -> f64 {
    round as f64 / average_game_length
}

pub fn game_phase(progress: f64) -> Phase {
    if progress > PHASE_SPLIT {
        Phase::Late
    } else {
        Phase::Early
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_AVERAGE_GAME_LENGTH;

    #[test]
    fn test_quarter_game_is_early() {
        let ratio = progress(5, DEFAULT_AVERAGE_GAME_LENGTH);
        assert_eq!(ratio, 0.25);
        assert_eq!(game_phase(ratio), Phase::Early);
    }

    #[test]
    fn test_three_quarters_is_late() {
        let ratio = progress(15, DEFAULT_AVERAGE_GAME_LENGTH);
        assert_eq!(ratio, 0.75);
        assert_eq!(game_phase(ratio), Phase::Late);
    }

    #[test]
    fn test_split_point_is_early() {
        assert_eq!(game_phase(progress(10, DEFAULT_AVERAGE_GAME_LENGTH)), Phase::Early);
        assert_eq!(game_phase(progress(11, DEFAULT_AVERAGE_GAME_LENGTH)), Phase::Late);
    }
}
