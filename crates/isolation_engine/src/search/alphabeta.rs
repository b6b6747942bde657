//! Depth-bounded alpha-beta search (explicit stack, cooperative)
//!
//! The minimizing and maximizing layers share one routine parameterized by
//! [`Layer`]. Instead of recursing natively, the routine keeps an explicit
//! stack of frames so that deep trees never grow the call stack and so that it
//! can `await` between nodes. Every time a slice of work has used up its time
//! budget the search yields to its executor; a harness that drops the future
//! at that point abandons the turn cleanly.
//!
//! Nothing is buffered: each root improvement is written to the reporter and
//! each visited node is counted in the context as it happens.

use super::context::SearchContext;
use super::reporter::MoveReporter;
use crate::constants::{DEFAULT_YIELD_SLICE, MAX_SEARCH_DEPTH, YIELD_CHECK_INTERVAL};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Heuristic;
use crate::game::GameState;
use crate::types::{Layer, PlayerId, Score};
use futures_lite::future::yield_now;
use instant::Instant;
use std::time::Duration;

/// One node whose children are being explored
///
/// Each frame stands for one call of the textbook recursive min/max function.
struct SearchFrame<S: GameState> {
    state: S,
    layer: Layer,
    depth: i32,
    alpha: Score,
    beta: Score,
    actions: Vec<S::Action>,
    next_action: usize,
    best: Score,
}

impl<S: GameState> SearchFrame<S> {
    /// Fold a child's value in; returns true when the remaining children can be pruned
    fn absorb(&mut self, value: Score) -> bool {
        match self.layer {
            Layer::Min => {
                self.best = self.best.min(value);
                if self.best <= self.alpha {
                    return true;
                }
                self.beta = self.beta.min(self.best);
            }
            Layer::Max => {
                self.best = self.best.max(value);
                if self.best >= self.beta {
                    return true;
                }
                self.alpha = self.alpha.max(self.best);
            }
        }
        false
    }
}

enum Visit<S: GameState> {
    /// Value known without expanding (terminal or depth cutoff)
    Leaf(Score),
    Expand(SearchFrame<S>),
}

pub struct AlphaBetaEngine<'a, S: GameState> {
    heuristic: Heuristic,
    player: PlayerId,
    progress: f64,
    context: &'a mut SearchContext,
    reporter: &'a MoveReporter<S::Action>,
    yield_slice: Duration,
    chunk_start: Instant,
    nodes: u64,
    cutoffs: u64,
}

impl<'a, S: GameState> AlphaBetaEngine<'a, S> {
    /// Engine searching on behalf of `player`
    ///
    /// `progress` is the agent's round divided by the average game length; it
    /// stays fixed for the whole turn.
    pub fn new(
        heuristic: Heuristic,
        player: PlayerId,
        progress: f64,
        context: &'a mut SearchContext,
        reporter: &'a MoveReporter<S::Action>,
    ) -> Self {
        AlphaBetaEngine {
            heuristic,
            player,
            progress,
            context,
            reporter,
            yield_slice: DEFAULT_YIELD_SLICE,
            chunk_start: Instant::now(),
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn with_yield_slice(mut self, yield_slice: Duration) -> Self {
        self.yield_slice = yield_slice;
        self
    }

    /// Nodes visited by this engine
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Subtrees skipped by pruning
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub(crate) fn report(&self, action: S::Action) {
        self.reporter.put(action);
    }

    /// Best root action and its value at `depth` plies
    ///
    /// Root children are searched with `depth - 1` remaining plies, so depth 1
    /// scores each child with the heuristic directly. Alpha is shared across
    /// root siblings; beta stays unbounded at the root. Every strict
    /// improvement is reported before the next sibling is searched.
    pub async fn search(&mut self, state: &S, depth: u32) -> EngineResult<(S::Action, Score)> {
        if depth == 0 || depth > MAX_SEARCH_DEPTH {
            return Err(EngineError::InvalidDepth { depth });
        }
        let remaining = i32::try_from(depth - 1).map_err(|_| EngineError::InvalidDepth { depth })?;
        let actions = state.actions();
        let Some(first) = actions.first() else {
            return Err(EngineError::NoLegalActions { ply: state.ply() });
        };

        let mut best_action = first.clone();
        let mut best_score = Score::NEG_INFINITY;
        let mut alpha = Score::NEG_INFINITY;
        let beta = Score::INFINITY;

        for action in actions {
            let child = state.result(&action);
            let value = self
                .evaluate(child, alpha, beta, remaining, Layer::Min)
                .await;
            alpha = alpha.max(value);
            if value > best_score {
                best_score = value;
                self.report(action.clone());
                best_action = action;
            }
            self.pace().await;
        }

        Ok((best_action, best_score))
    }

    /// Minimax value of `state` within the (alpha, beta) window
    async fn evaluate(
        &mut self,
        state: S,
        alpha: Score,
        beta: Score,
        depth: i32,
        layer: Layer,
    ) -> Score {
        let mut stack = match self.visit(state, alpha, beta, depth, layer) {
            Visit::Leaf(score) => return score,
            Visit::Expand(frame) => vec![frame],
        };
        let mut returning: Option<Score> = None;

        while let Some(frame) = stack.last_mut() {
            // === Fold the value of the child that just finished ===
            if let Some(value) = returning.take() {
                if frame.absorb(value) {
                    self.cutoffs += 1;
                    returning = Some(frame.best);
                    stack.pop();
                    continue;
                }
            }

            // === Descend into the next child ===
            if frame.next_action < frame.actions.len() {
                let child = frame.state.result(&frame.actions[frame.next_action]);
                frame.next_action += 1;
                let (alpha, beta) = (frame.alpha, frame.beta);
                let (depth, layer) = (frame.depth - 1, frame.layer.flip());

                match self.visit(child, alpha, beta, depth, layer) {
                    Visit::Leaf(score) => returning = Some(score),
                    Visit::Expand(child_frame) => stack.push(child_frame),
                }
                self.pace().await;
                continue;
            }

            // === All children seen ===
            returning = Some(frame.best);
            stack.pop();
        }

        // The outermost frame's value is left in `returning` when the stack empties
        returning.unwrap_or_else(|| layer.identity())
    }

    /// Enter a node: count it, then either score it or open a frame for it
    fn visit(&mut self, state: S, alpha: Score, beta: Score, depth: i32, layer: Layer) -> Visit<S> {
        self.nodes += 1;
        self.context.record_node();

        if state.terminal_test() {
            return Visit::Leaf(state.utility(self.player));
        }
        if depth <= 0 {
            return Visit::Leaf(self.heuristic.evaluate(&state, self.player, self.progress));
        }

        // A non-terminal state without actions breaks the rules contract; the
        // empty frame resolves to the layer identity.
        let actions = state.actions();
        Visit::Expand(SearchFrame {
            state,
            layer,
            depth,
            alpha,
            beta,
            actions,
            next_action: 0,
            best: layer.identity(),
        })
    }

    /// Yield to the executor once the current slice of work is used up
    async fn pace(&mut self) {
        if self.nodes % YIELD_CHECK_INTERVAL == 0 && self.chunk_start.elapsed() >= self.yield_slice {
            yield_now().await;
            self.chunk_start = Instant::now();
        }
    }
}
