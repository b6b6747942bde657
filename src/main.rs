use anyhow::Result;
use clap::Parser;
use isolation_engine::evaluation::{Heuristic, CATALOG, FALLBACK_HEURISTIC_ID};
use knights_isolation::cli::{Cli, Command, PlayArgs};
use knights_isolation::harness::run_match;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Play(args) => play(args).await,
        Command::Heuristics => {
            list_heuristics();
            Ok(())
        }
    }
}

async fn play(args: PlayArgs) -> Result<()> {
    let settings = args.settings()?;
    info!(
        "[MATCH] {} vs {}: {} games, {}ms per move",
        settings.first.label(),
        settings.second.label(),
        settings.match_config.games,
        settings.match_config.time_limit_ms
    );

    let summary = run_match(&settings).await?;

    if args.show_boards {
        for (index, game) in summary.games.iter().enumerate() {
            println!("game {} ({} won)", index + 1, game.winner);
            println!("{}", game.final_state);
        }
    }

    let timeouts: u32 = summary.games.iter().flat_map(|game| game.timeouts).sum();
    println!(
        "{:<28} {:>4} wins ({:.1}%)",
        settings.first.label(),
        summary.wins[0],
        summary.win_rate(0) * 100.0
    );
    println!(
        "{:<28} {:>4} wins ({:.1}%)",
        settings.second.label(),
        summary.wins[1],
        summary.win_rate(1) * 100.0
    );
    println!("{} turns hit the time limit", timeouts);
    Ok(())
}

fn list_heuristics() {
    for (id, (name, heuristic)) in CATALOG.iter().enumerate() {
        let detail = match heuristic {
            Heuristic::Mobility(weights) => format!("{weights}"),
            Heuristic::Phased { early, late } => format!("early {early}, late {late}"),
        };
        let marker = if id as u32 == FALLBACK_HEURISTIC_ID { " (fallback)" } else { "" };
        println!("{id:>2}  {name:<12} {detail}{marker}");
    }
}
