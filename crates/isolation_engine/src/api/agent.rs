//! Agent interface and the random baseline
//!
//! An agent is asked for one move per turn. It writes its answer (possibly
//! several times) into the turn's [`MoveReporter`]; whoever runs the game reads
//! the reporter when the turn ends, whether or not `decide` returned.

use crate::error::{EngineError, EngineResult};
use crate::game::GameState;
use crate::search::MoveReporter;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[async_trait(?Send)]
pub trait Agent<S: GameState + 'static> {
    /// Display name for logs and match tables
    fn name(&self) -> String;

    /// Pick a move for the player to move in `state`
    async fn decide(&mut self, state: &S, reporter: &MoveReporter<S::Action>) -> EngineResult<S::Action>;

    /// Serialized cross-turn state to hand back on the next turn
    fn save_context(&self) -> EngineResult<Option<String>> {
        Ok(None)
    }

    /// Restore state produced by [`Agent::save_context`]
    fn load_context(&mut self, _saved: &str) -> EngineResult<()> {
        Ok(())
    }
}

/// Plays a uniformly random legal move
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomAgent { rng }
    }
}

#[async_trait(?Send)]
impl<S: GameState + 'static> Agent<S> for RandomAgent {
    fn name(&self) -> String {
        "random".to_string()
    }

    async fn decide(&mut self, state: &S, reporter: &MoveReporter<S::Action>) -> EngineResult<S::Action> {
        let actions = state.actions();
        if actions.is_empty() {
            return Err(EngineError::NoLegalActions { ply: state.ply() });
        }
        let action = actions[self.rng.random_range(0..actions.len())].clone();
        reporter.put(action.clone());
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isolation::{Isolation, Square};
    use futures_lite::future::block_on;

    #[test]
    fn test_random_agent_plays_legal_moves() {
        let mut agent = RandomAgent::new(Some(3));
        let state = Isolation::with_placements(Square::new(4, 4).unwrap(), Square::new(9, 1).unwrap());
        for _ in 0..20 {
            let reporter = MoveReporter::new();
            let action = block_on(agent.decide(&state, &reporter)).unwrap();
            assert!(state.actions().contains(&action));
            assert_eq!(reporter.latest(), Some(action));
        }
    }

    #[test]
    fn test_random_agent_has_no_context() {
        let agent = RandomAgent::new(None);
        assert!(Agent::<Isolation>::save_context(&agent).unwrap().is_none());
    }
}
