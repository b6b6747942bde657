//! Game runner
//!
//! Plays Knights Isolation between two agents under a per-move time limit.
//!
//! Each turn gets a fresh [`MoveReporter`]. The agent's `decide` future runs
//! until it finishes or the turn clock expires, at which point the future is
//! dropped and whatever move sits in the reporter is played. Agents that
//! report nothing, report an illegal move or fail outright forfeit the game.
//!
//! Search contexts are handed back to their owner at the start of each of its
//! turns, so an agent sees the state it saved on its previous turn.

use crate::error::HarnessResult;
use crate::settings::{AgentSpec, Settings};
use isolation_engine::isolation::{Isolation, Square};
use isolation_engine::search::MoveReporter;
use isolation_engine::{Agent, GameState, PlayerId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::future::{poll_fn, Future};
use std::pin::pin;
use std::task::Poll;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Why a game ended before the board ran out of moves
#[derive(Debug, Clone, PartialEq)]
pub enum Forfeit {
    /// The turn ended with nothing in the reporter
    NoMove { player: PlayerId },
    /// The reported move was not among the legal actions
    IllegalMove { player: PlayerId, action: Square },
    /// `decide` returned an error
    AgentError { player: PlayerId, message: String },
}

impl Forfeit {
    pub fn player(&self) -> PlayerId {
        match self {
            Forfeit::NoMove { player }
            | Forfeit::IllegalMove { player, .. }
            | Forfeit::AgentError { player, .. } => *player,
        }
    }
}

impl fmt::Display for Forfeit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forfeit::NoMove { player } => write!(f, "{player} reported no move"),
            Forfeit::IllegalMove { player, action } => write!(f, "{player} played illegal move {action}"),
            Forfeit::AgentError { player, message } => write!(f, "{player} failed: {message}"),
        }
    }
}

/// Outcome of one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: PlayerId,
    pub moves: Vec<Square>,
    pub forfeit: Option<Forfeit>,
    /// Turns per seat that ran into the time limit
    pub timeouts: [u32; 2],
    /// Last saved context per seat
    pub contexts: [Option<String>; 2],
    pub final_state: Isolation,
}

/// Tally over a match, counted per agent spec rather than per seat
#[derive(Debug, Clone, Default)]
pub struct MatchSummary {
    /// Wins for `first` and `second`
    pub wins: [u32; 2],
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn win_rate(&self, index: usize) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        f64::from(self.wins[index]) / self.games.len() as f64
    }
}

/// Run `fut` until it completes or `limit` has elapsed
///
/// The wall clock is checked on every poll as well as by a timer, so a
/// future that yields regularly is stopped within one of its yield slices.
pub async fn run_with_deadline<F: Future>(limit: Duration, fut: F) -> Option<F::Output> {
    let deadline = Instant::now() + limit;
    let mut fut = pin!(fut);
    let mut timer = pin!(tokio::time::sleep_until(deadline));
    poll_fn(|cx| {
        if let Poll::Ready(output) = fut.as_mut().poll(cx) {
            return Poll::Ready(Some(output));
        }
        if Instant::now() >= deadline || timer.as_mut().poll(cx).is_ready() {
            return Poll::Ready(None);
        }
        Poll::Pending
    })
    .await
}

/// Play one game to the end
///
/// `agents[0]` moves for player one, `agents[1]` for player two.
pub async fn play_game(
    agents: &mut [Box<dyn Agent<Isolation>>; 2],
    initial: Isolation,
    time_limit: Duration,
) -> HarnessResult<GameRecord> {
    let mut state = initial;
    let mut moves = Vec::new();
    let mut timeouts = [0u32; 2];
    let mut contexts: [Option<String>; 2] = [None, None];

    let forfeit = loop {
        if state.terminal_test() {
            break None;
        }
        let player = state.active_player();
        let seat = player.index();
        let agent = &mut agents[seat];

        if let Some(saved) = &contexts[seat] {
            agent.load_context(saved)?;
        }

        let reporter = MoveReporter::new();
        let outcome = run_with_deadline(time_limit, agent.decide(&state, &reporter)).await;
        contexts[seat] = agent.save_context()?;

        match outcome {
            Some(Ok(_)) => {}
            Some(Err(err)) => {
                warn!("[HARNESS] {} ({}) failed at ply {}: {}", player, agent.name(), state.ply(), err);
                break Some(Forfeit::AgentError {
                    player,
                    message: err.to_string(),
                });
            }
            None => {
                timeouts[seat] += 1;
                debug!("[HARNESS] {} hit the time limit at ply {}", player, state.ply());
            }
        }

        let Some(action) = reporter.take() else {
            break Some(Forfeit::NoMove { player });
        };
        if !state.actions().contains(&action) {
            break Some(Forfeit::IllegalMove { player, action });
        }
        moves.push(action);
        state = state.result(&action);
    };

    let winner = match &forfeit {
        Some(forfeit) => forfeit.player().opponent(),
        // The player left to move is out of moves
        None => state.active_player().opponent(),
    };

    Ok(GameRecord {
        winner,
        moves,
        forfeit,
        timeouts,
        contexts,
        final_state: state,
    })
}

/// Play `settings.match_config.games` games, swapping seats every game
pub async fn run_match(settings: &Settings) -> HarnessResult<MatchSummary> {
    settings.validate()?;
    let config = &settings.match_config;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let specs: [&AgentSpec; 2] = [&settings.first, &settings.second];
    let mut summary = MatchSummary::default();

    for game in 0..config.games {
        // Spec index seated as player one this game
        let leader = (game % 2) as usize;
        let seat_specs = [specs[leader], specs[1 - leader]];
        let agent_seed = |seat: u64| config.seed.map(|seed| seed ^ ((u64::from(game) << 8) | seat));
        let mut agents = [seat_specs[0].build(agent_seed(1)), seat_specs[1].build(agent_seed(2))];

        let initial = Isolation::with_random_blocks(config.blocked_squares, &mut rng);
        let record = play_game(&mut agents, initial, config.time_limit()).await?;

        let winner_spec = if record.winner == PlayerId::One { leader } else { 1 - leader };
        summary.wins[winner_spec] += 1;

        info!(
            "[MATCH] game {}/{}: {} beat {} in {} moves{}",
            game + 1,
            config.games,
            specs[winner_spec].label(),
            specs[1 - winner_spec].label(),
            record.moves.len(),
            record
                .forfeit
                .as_ref()
                .map(|forfeit| format!(" ({forfeit})"))
                .unwrap_or_default()
        );
        summary.games.push(record);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_passes_through_finished_futures() {
        assert_eq!(run_with_deadline(Duration::from_millis(50), async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_deadline_cuts_off_pending_futures() {
        let never = std::future::pending::<()>();
        assert_eq!(run_with_deadline(Duration::from_millis(5), never).await, None);
    }

    #[tokio::test]
    async fn test_deadline_cuts_off_busy_yielding_futures() {
        let busy = async {
            loop {
                futures_lite::future::yield_now().await;
            }
        };
        let started = std::time::Instant::now();
        let result: Option<()> = run_with_deadline(Duration::from_millis(10), busy).await;
        assert!(result.is_none());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_forfeit_names_the_offender() {
        let forfeit = Forfeit::IllegalMove {
            player: PlayerId::Two,
            action: Square::new(0, 0).unwrap(),
        };
        assert_eq!(forfeit.player(), PlayerId::Two);
        assert_eq!(forfeit.to_string(), "player 2 played illegal move a1");
    }
}
