//! Heuristic catalog
//!
//! Every heuristic is a closed-form function of the two players' mobility.
//! The catalog is addressed by integer id so it can be chosen from the
//! command line or a config file; the id is resolved once, when the agent is
//! built, into a [`Heuristic`] value that the search calls directly.
//!
//! | id | name        | early game            | late game             |
//! |----|-------------|-----------------------|-----------------------|
//! | 0  | baseline    | linear 1/1            | same                  |
//! | 1  | aggressive1 | linear 1/2            | same                  |
//! | 2  | aggressive2 | linear 1/3            | same                  |
//! | 3  | squared1    | squared 1/1           | same                  |
//! | 4  | squared2    | squared 1/1.5         | same                  |
//! | 5  | squared3    | squared 1/2           | same                  |
//! | 6  | phase1      | linear 2/1            | linear 1/2            |
//! | 7  | phase2      | linear 3/1            | linear 1/3            |
//! | 8  | phase3      | linear 3/1            | squared 1/1.5         |
//! | 9  | phase4      | linear 1/2            | linear 2/1            |
//! | 10 | phase5      | squared 1/1.5         | linear 3/1            |
//!
//! Weights are written `delta/gamma`. Ids past the end of the table resolve
//! to `phase5`.

use super::mobility::Weights;
use super::phase::{game_phase, Phase};
use crate::game::GameState;
use crate::types::{PlayerId, Score};
use std::fmt;
use tracing::warn;

const BASELINE: Weights = Weights::linear(1.0, 1.0);
const AGGRESSIVE_1: Weights = Weights::linear(1.0, 2.0);
const AGGRESSIVE_2: Weights = Weights::linear(1.0, 3.0);
const DEFENSIVE_1: Weights = Weights::linear(2.0, 1.0);
const DEFENSIVE_2: Weights = Weights::linear(3.0, 1.0);
const SQUARED_1: Weights = Weights::squared(1.0, 1.0);
const SQUARED_2: Weights = Weights::squared(1.0, 1.5);
const SQUARED_3: Weights = Weights::squared(1.0, 2.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heuristic {
    /// Same weights for the whole game
    Mobility(Weights),
    /// Weights chosen by game phase
    Phased { early: Weights, late: Weights },
}

/// (name, heuristic) by id
pub const CATALOG: [(&str, Heuristic); 11] = [
    ("baseline", Heuristic::Mobility(BASELINE)),
    ("aggressive1", Heuristic::Mobility(AGGRESSIVE_1)),
    ("aggressive2", Heuristic::Mobility(AGGRESSIVE_2)),
    ("squared1", Heuristic::Mobility(SQUARED_1)),
    ("squared2", Heuristic::Mobility(SQUARED_2)),
    ("squared3", Heuristic::Mobility(SQUARED_3)),
    (
        "phase1",
        Heuristic::Phased {
            early: DEFENSIVE_1,
            late: AGGRESSIVE_1,
        },
    ),
    (
        "phase2",
        Heuristic::Phased {
            early: DEFENSIVE_2,
            late: AGGRESSIVE_2,
        },
    ),
    (
        "phase3",
        Heuristic::Phased {
            early: DEFENSIVE_2,
            late: SQUARED_2,
        },
    ),
    (
        "phase4",
        Heuristic::Phased {
            early: AGGRESSIVE_1,
            late: DEFENSIVE_1,
        },
    ),
    (
        "phase5",
        Heuristic::Phased {
            early: SQUARED_2,
            late: DEFENSIVE_2,
        },
    ),
];

/// Id every out-of-range selector resolves to
pub const FALLBACK_HEURISTIC_ID: u32 = CATALOG.len() as u32 - 1;

/// A catalog entry bound to its id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedHeuristic {
    pub id: u32,
    pub name: &'static str,
    pub heuristic: Heuristic,
}

impl SelectedHeuristic {
    /// Resolve a selector id; unknown ids fall back to the last entry
    pub fn from_id(id: u32) -> Self {
        let resolved = if (id as usize) < CATALOG.len() {
            id
        } else {
            warn!(
                "[HEURISTIC] Unknown heuristic id {}, using {}",
                id, CATALOG[FALLBACK_HEURISTIC_ID as usize].0
            );
            FALLBACK_HEURISTIC_ID
        };
        let (name, heuristic) = CATALOG[resolved as usize];
        SelectedHeuristic {
            id: resolved,
            name,
            heuristic,
        }
    }

    /// Look an entry up by its catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .position(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|id| Self::from_id(id as u32))
    }
}

impl fmt::Display for SelectedHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

impl Heuristic {
    /// Weights in effect at `progress` (round / average game length)
    pub fn weights_at(&self, progress: f64) -> Weights {
        match *self {
            Heuristic::Mobility(weights) => weights,
            Heuristic::Phased { early, late } => match game_phase(progress) {
                Phase::Early => early,
                Phase::Late => late,
            },
        }
    }

    pub fn evaluate<S: GameState>(&self, state: &S, player: PlayerId, progress: f64) -> Score {
        self.weights_at(progress).evaluate(state, player)
    }
}
