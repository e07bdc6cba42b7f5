//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use std::str::FromStr;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::defaults;
use crate::ConfigLoadError;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_algorithm() -> String {
    defaults::algorithm().into()
}
fn d_depth() -> u32 {
    defaults::depth()
}
fn d_evaluator() -> String {
    defaults::evaluator().into()
}
fn d_reflex_seed() -> Option<u64> {
    defaults::reflex_seed()
}
fn d_layout() -> String {
    defaults::layout().into()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_max_moves() -> u32 {
    defaults::max_moves()
}
fn d_episode_seed() -> u64 {
    defaults::episode_seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub reflex: ReflexConfig,
    #[serde(default)]
    pub episode: EpisodeConfig,
}

impl CentralConfig {
    /// Reject values no run could use.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if LevelFilter::from_str(&self.common.log_level).is_err() {
            return Err(ConfigLoadError::Invalid(format!(
                "common.log_level '{}' is not a log level",
                self.common.log_level
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigLoadError::Invalid("search.depth must be at least 1".into()));
        }
        if self.search.evaluator.trim().is_empty() {
            return Err(ConfigLoadError::Invalid("search.evaluator cannot be empty".into()));
        }
        if self.episode.games == 0 {
            return Err(ConfigLoadError::Invalid("episode.games must be at least 1".into()));
        }
        if self.episode.max_moves == 0 {
            return Err(ConfigLoadError::Invalid("episode.max_moves must be at least 1".into()));
        }
        Ok(())
    }
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search agent settings
///
/// The algorithm and evaluator are kept as names here and resolved by the
/// search crate when an agent is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchSection {
    #[serde(default = "d_algorithm")]
    pub algorithm: String,
    /// Depth limit in full rounds
    #[serde(default = "d_depth")]
    pub depth: u32,
    #[serde(default = "d_evaluator")]
    pub evaluator: String,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            algorithm: defaults::algorithm().into(),
            depth: defaults::depth(),
            evaluator: defaults::evaluator().into(),
        }
    }
}

/// Reflex agent settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReflexConfig {
    /// Tie-breaking seed; `None` falls back to the episode seed
    #[serde(default = "d_reflex_seed")]
    pub seed: Option<u64>,
}

impl Default for ReflexConfig {
    fn default() -> Self {
        Self {
            seed: defaults::reflex_seed(),
        }
    }
}

/// Episode runner settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Built-in layout name
    #[serde(default = "d_layout")]
    pub layout: String,
    #[serde(default = "d_games")]
    pub games: u32,
    /// Forager moves before an episode is called off
    #[serde(default = "d_max_moves")]
    pub max_moves: u32,
    /// Seed for the chasers' random moves
    #[serde(default = "d_episode_seed")]
    pub seed: u64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            layout: defaults::layout().into(),
            games: defaults::games(),
            max_moves: defaults::max_moves(),
            seed: defaults::episode_seed(),
        }
    }
}
