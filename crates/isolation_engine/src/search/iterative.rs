//! Iterative deepening search
//!
//! Runs the alpha-beta engine at depth 2, 3, ... up to the configured maximum.
//! After each completed depth the result is reported if it beats every
//! earlier depth of this turn. The loop never checks a clock: the harness
//! decides when the turn is over and reads whatever was reported last.

use super::alphabeta::AlphaBetaEngine;
use crate::constants::MIN_ITERATION_DEPTH;
use crate::error::EngineResult;
use crate::game::GameState;
use crate::types::Score;
use tracing::debug;

/// Best answer of one deepening run
#[derive(Debug, Clone, PartialEq)]
pub struct Deepening<A> {
    pub action: A,
    pub score: Score,
    /// Deepest iteration that ran to completion (0 if none did)
    pub completed_depth: u32,
}

/// Iterative deepening from `fallback` up to `max_depth`
pub async fn iterative_deepening<S: GameState>(
    engine: &mut AlphaBetaEngine<'_, S>,
    state: &S,
    fallback: S::Action,
    max_depth: u32,
) -> EngineResult<Deepening<S::Action>> {
    let mut best = Deepening {
        action: fallback,
        score: Score::NEG_INFINITY,
        completed_depth: 0,
    };

    for depth in MIN_ITERATION_DEPTH..=max_depth {
        let (action, score) = engine.search(state, depth).await?;
        best.completed_depth = depth;

        debug!(
            "[SEARCH] {:?} depth {} -> {:?} score {} ({} nodes, {} cutoffs)",
            engine.player(),
            depth,
            action,
            score,
            engine.nodes(),
            engine.cutoffs()
        );

        if score > best.score {
            best.score = score;
            engine.report(action.clone());
            best.action = action;
        }
    }

    Ok(best)
}
