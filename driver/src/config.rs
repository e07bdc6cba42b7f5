//! Command line for the gambit driver
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use engine_config::CentralConfig;
use games_pursuit::Layout;
use minimax::{Algorithm, SearchConfig};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "gambit")]
#[command(about = "Adversarial search agents playing a grid pursuit game")]
#[command(
    long_about = "Plays episodes of the pursuit game with a minimax, alpha-beta or reflex
forager against randomly moving chasers.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more episodes and report the results
    Play(PlayArgs),
    /// List the built-in layouts
    Layouts,
}

/// Which agent controls the forager
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Minimax,
    Alphabeta,
    Reflex,
}

impl From<Algorithm> for AgentKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Minimax => AgentKind::Minimax,
            Algorithm::AlphaBeta => AgentKind::Alphabeta,
        }
    }
}

/// Options for `gambit play`; anything left unset comes from the central config
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Forager agent
    #[arg(long, value_enum)]
    pub agent: Option<AgentKind>,

    /// Search depth in full rounds
    #[arg(long)]
    pub depth: Option<u32>,

    /// Leaf evaluation function (score, better, proximity)
    #[arg(long)]
    pub evaluator: Option<String>,

    /// Built-in layout name
    #[arg(long)]
    pub layout: Option<String>,

    /// Seed for the chasers (and the reflex agent unless configured)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Forager moves before an episode is called off
    #[arg(long)]
    pub max_moves: Option<u32>,

    /// Number of episodes
    #[arg(long)]
    pub games: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the final board of every episode
    #[arg(long)]
    pub show: bool,
}

/// Fully resolved settings for a play session
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySettings {
    pub agent: AgentKind,
    pub search: SearchConfig,
    pub reflex_seed: u64,
    pub layout: String,
    pub seed: u64,
    pub max_moves: u32,
    pub games: u32,
    pub log_level: String,
    pub show: bool,
}

impl PlayArgs {
    /// Merge the CLI options over the central config.
    pub fn resolve(&self, central: &CentralConfig) -> Result<PlaySettings> {
        let algorithm: Algorithm = central.search.algorithm.parse()?;
        let agent = self.agent.unwrap_or_else(|| algorithm.into());
        let algorithm = match agent {
            AgentKind::Minimax => Algorithm::Minimax,
            AgentKind::Alphabeta => Algorithm::AlphaBeta,
            AgentKind::Reflex => algorithm,
        };

        let seed = self.seed.unwrap_or(central.episode.seed);
        let search = SearchConfig::default()
            .with_algorithm(algorithm)
            .with_depth(self.depth.unwrap_or(central.search.depth))
            .with_evaluator(self.evaluator.clone().unwrap_or_else(|| central.search.evaluator.clone()));

        let settings = PlaySettings {
            agent,
            search,
            reflex_seed: central.reflex.seed.unwrap_or(seed),
            layout: self.layout.clone().unwrap_or_else(|| central.episode.layout.clone()),
            seed,
            max_moves: self.max_moves.unwrap_or(central.episode.max_moves),
            games: self.games.unwrap_or(central.episode.games),
            log_level: self.log_level.clone().unwrap_or_else(|| central.common.log_level.clone()),
            show: self.show,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl PlaySettings {
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;

        if !Layout::names().contains(&self.layout.as_str()) {
            return Err(anyhow!(
                "unknown layout '{}', expected one of {}",
                self.layout,
                Layout::names().join(", ")
            ));
        }

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.max_moves == 0 {
            return Err(anyhow!("max_moves must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}
