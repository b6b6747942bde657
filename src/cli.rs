//! Command-line interface

use crate::error::HarnessResult;
use crate::settings::{AgentSpec, Settings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "knights-isolation", version, about = "Knights Isolation agents and match runner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a match between two agents
    Play(PlayArgs),
    /// List the heuristic catalog
    Heuristics,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// JSON settings file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// First agent: `random`, a heuristic id or a heuristic name
    #[arg(long)]
    pub first: Option<AgentSpec>,

    /// Second agent: `random`, a heuristic id or a heuristic name
    #[arg(long)]
    pub second: Option<AgentSpec>,

    #[arg(long)]
    pub games: Option<u32>,

    /// Thinking time per move in milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Deepest search pass for search agents
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Squares blocked at random before each game
    #[arg(long)]
    pub blocked: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final board of every game
    #[arg(long)]
    pub show_boards: bool,
}

impl PlayArgs {
    /// Settings file (or defaults) with the command-line overrides applied
    pub fn settings(&self) -> HarnessResult<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(first) = &self.first {
            settings.first = first.clone();
        }
        if let Some(second) = &self.second {
            settings.second = second.clone();
        }
        let config = &mut settings.match_config;
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(limit) = self.time_limit_ms {
            config.time_limit_ms = limit;
        }
        if let Some(blocked) = self.blocked {
            config.blocked_squares = blocked;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(depth) = self.max_depth {
            for spec in [&mut settings.first, &mut settings.second] {
                if let AgentSpec::Search(agent) = spec {
                    agent.max_depth = depth;
                }
            }
        }
        settings.validate()?;
        Ok(settings)
    }
}
