//! Iterative-deepening alpha-beta agent
//!
//! Each turn follows the same three steps:
//!
//! 1. report a random legal move straight away, so the turn always has an
//!    answer even if it is cut off before any search finishes;
//! 2. open the turn in the search context (round counter, node-count slot);
//! 3. deepen from depth 2 to `max_depth`, reporting every improvement.
//!
//! The heuristic is resolved from its id once, in the constructor, and never
//! changes afterwards.

use super::agent::Agent;
use crate::config::AgentConfig;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{progress, SelectedHeuristic};
use crate::game::GameState;
use crate::search::{iterative_deepening, AlphaBetaEngine, MoveReporter, SearchContext};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

pub struct SearchAgent {
    heuristic: SelectedHeuristic,
    config: AgentConfig,
    context: Option<SearchContext>,
    rng: StdRng,
}

impl SearchAgent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        SearchAgent {
            heuristic: SelectedHeuristic::from_id(config.heuristic),
            config,
            context: None,
            rng,
        }
    }

    /// Agent with default settings and the given heuristic id
    pub fn with_heuristic(id: u32) -> Self {
        Self::new(AgentConfig::with_heuristic(id))
    }

    pub fn heuristic(&self) -> SelectedHeuristic {
        self.heuristic
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    /// Choose a move for the player to move in `state`
    ///
    /// At least one legal move is in `reporter` before the first await point,
    /// so dropping this future at any time still leaves a playable answer.
    pub async fn decide<S: GameState>(
        &mut self,
        state: &S,
        reporter: &MoveReporter<S::Action>,
    ) -> EngineResult<S::Action> {
        let actions = state.actions();
        if actions.is_empty() {
            return Err(EngineError::NoLegalActions { ply: state.ply() });
        }
        let fallback = actions[self.rng.random_range(0..actions.len())].clone();
        reporter.put(fallback.clone());

        let context = SearchContext::begin_turn(&mut self.context);
        let round = context.round;
        let player = state.active_player();
        let mut engine = AlphaBetaEngine::new(
            self.heuristic.heuristic,
            player,
            progress(round, self.config.average_game_length),
            context,
            reporter,
        )
        .with_yield_slice(self.config.yield_slice());

        let best = iterative_deepening(&mut engine, state, fallback, self.config.max_depth).await?;

        info!(
            "[AGENT] {} ({}) round {}: {:?} score {} depth {} ({} nodes)",
            player,
            self.heuristic,
            round,
            best.action,
            best.score,
            best.completed_depth,
            engine.nodes()
        );

        Ok(best.action)
    }
}

#[async_trait(?Send)]
impl<S: GameState + 'static> Agent<S> for SearchAgent {
    fn name(&self) -> String {
        format!("alphabeta[{}]", self.heuristic.name)
    }

    async fn decide(&mut self, state: &S, reporter: &MoveReporter<S::Action>) -> EngineResult<S::Action> {
        SearchAgent::decide(self, state, reporter).await
    }

    fn save_context(&self) -> EngineResult<Option<String>> {
        self.context.as_ref().map(SearchContext::to_json).transpose()
    }

    fn load_context(&mut self, saved: &str) -> EngineResult<()> {
        self.context = Some(SearchContext::from_json(saved)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isolation::{Isolation, Square};
    use futures_lite::future::{block_on, poll_once};

    fn agent(heuristic: u32, max_depth: u32) -> SearchAgent {
        SearchAgent::new(AgentConfig {
            heuristic,
            max_depth,
            seed: Some(17),
            ..AgentConfig::default()
        })
    }

    fn midgame() -> Isolation {
        Isolation::with_placements(Square::new(4, 4).unwrap(), Square::new(6, 3).unwrap())
    }

    #[test]
    fn test_decide_returns_legal_move_and_reports_it() {
        let mut agent = agent(0, 4);
        let state = midgame();
        let reporter = MoveReporter::new();
        let action = block_on(agent.decide(&state, &reporter)).unwrap();
        assert!(state.actions().contains(&action));
        assert!(state.actions().contains(&reporter.latest().unwrap()));
        // fallback, then at least one improvement per depth pass
        assert!(reporter.writes() >= 2);
    }

    #[test]
    fn test_first_poll_leaves_a_move_even_when_interrupted() {
        let mut agent = SearchAgent::new(AgentConfig {
            max_depth: 8,
            yield_slice_ms: 0,
            seed: Some(1),
            ..AgentConfig::default()
        });
        // Empty board: 99 placements at the root, far too big to finish in one slice
        let state = Isolation::new();
        let reporter = MoveReporter::new();
        let finished = block_on(poll_once(agent.decide(&state, &reporter)));
        assert!(finished.is_none());
        let reported = reporter.latest().unwrap();
        assert!(state.actions().contains(&reported));
        // The interrupted turn still opened its context slot
        let context = agent.context().unwrap();
        assert_eq!(context.round, 0);
        assert!(context.current_nodes() > 0);
    }

    #[test]
    fn test_zero_depth_budget_reports_fallback_only() {
        let mut agent = agent(5, 1);
        let state = midgame();
        let reporter = MoveReporter::new();
        let action = block_on(agent.decide(&state, &reporter)).unwrap();
        assert_eq!(reporter.writes(), 1);
        assert_eq!(reporter.latest(), Some(action));
        assert_eq!(agent.context().unwrap().current_nodes(), 0);
    }

    #[test]
    fn test_rounds_advance_once_per_turn() {
        let mut agent = agent(6, 2);
        let mut state = midgame();
        for turn in 0..4u32 {
            let reporter = MoveReporter::new();
            let action = block_on(agent.decide(&state, &reporter)).unwrap();
            let context = agent.context().unwrap();
            assert_eq!(context.round, turn);
            assert_eq!(context.node_counts.len(), turn as usize + 1);
            assert!(context.current_nodes() > 0);
            // opponent replies with its first legal move
            state = state.result(&action);
            match state.actions().first() {
                Some(reply) => state = state.result(reply),
                None => break,
            }
            if state.terminal_test() {
                break;
            }
        }
    }

    #[test]
    fn test_no_legal_actions_writes_nothing() {
        let state = Isolation::with_placements(Square::new(5, 4).unwrap(), Square::new(0, 0).unwrap())
            .block(Square::new(1, 2).unwrap())
            .block(Square::new(2, 1).unwrap())
            .result(&Square::new(6, 6).unwrap());
        let mut agent = agent(0, 3);
        let reporter = MoveReporter::new();
        let err = block_on(agent.decide(&state, &reporter)).unwrap_err();
        assert!(matches!(err, EngineError::NoLegalActions { ply: 3 }));
        assert!(reporter.is_empty());
        assert!(agent.context().is_none());
    }

    #[test]
    fn test_context_survives_save_and_load() {
        let mut first = agent(0, 2);
        let state = midgame();
        block_on(first.decide(&state, &MoveReporter::new())).unwrap();
        let saved = Agent::<Isolation>::save_context(&first).unwrap().unwrap();

        let mut second = agent(0, 2);
        Agent::<Isolation>::load_context(&mut second, &saved).unwrap();
        assert_eq!(second.context(), first.context());

        block_on(second.decide(&state, &MoveReporter::new())).unwrap();
        assert_eq!(second.context().unwrap().round, 1);
    }

    #[test]
    fn test_unknown_heuristic_id_still_plays() {
        let mut agent = agent(99, 3);
        assert_eq!(agent.heuristic().name, "phase5");
        let state = midgame();
        let action = block_on(agent.decide(&state, &MoveReporter::new())).unwrap();
        assert!(state.actions().contains(&action));
    }
}
