//! gambit - adversarial search agents playing the pursuit game
//!
//! Loads the central configuration, applies command line overrides, and
//! plays episodes with a minimax, alpha-beta or reflex forager against
//! randomly moving chasers.

use anyhow::Result;
use clap::Parser;
use games_pursuit::Layout;
use tracing::info;

mod config;
mod episode;

use crate::config::{Cli, Command, PlaySettings};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Layouts => {
            for name in Layout::names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Play(args) => {
            let central = engine_config::load_config()?;
            let settings = args.resolve(&central)?;
            init_tracing(&settings.log_level)?;
            play(&settings)
        }
    }
}

fn play(settings: &PlaySettings) -> Result<()> {
    info!(
        agent = ?settings.agent,
        depth = settings.search.depth,
        evaluator = %settings.search.evaluator,
        layout = %settings.layout,
        games = settings.games,
        seed = settings.seed,
        "Starting session"
    );

    let session = episode::run_session(settings)?;
    for summary in &session.episodes {
        println!("{summary}");
        if settings.show {
            println!("{}\n", summary.board);
        }
    }

    println!(
        "Win rate: {}/{} ({:.2})",
        session.wins(),
        session.episodes.len(),
        session.win_rate()
    );
    println!("Average score: {:.1}", session.average_score());
    Ok(())
}
