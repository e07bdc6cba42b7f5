//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::CentralConfig;

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Environment variable naming an explicit config file
const CONFIG_ENV: &str = "GAMBIT_CONFIG";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for {key}")]
    InvalidOverride { key: &'static str, value: String },

    #[error("GAMBIT_CONFIG={} does not exist", .0.display())]
    MissingExplicitPath(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the GAMBIT_CONFIG environment variable (must exist)
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied and the result
/// is validated.
pub fn load_config() -> Result<CentralConfig, ConfigLoadError> {
    // Check for explicit config path
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ConfigLoadError::MissingExplicitPath(path));
        }
        info!("Loading config from {}: {}", CONFIG_ENV, path.display());
        return load_from_path(&path);
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    finish(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<CentralConfig, ConfigLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    finish(config)
}

fn finish(config: CentralConfig) -> Result<CentralConfig, ConfigLoadError> {
    let config = apply_env_overrides(config)?;
    config.validate()?;
    Ok(config)
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) = std::env::var($key) {
            match v.trim().parse() {
                Ok(parsed) => $config.$section.$field = parsed,
                Err(_) => return Err(ConfigLoadError::InvalidOverride { key: $key, value: v }),
            }
        }
    };
    // Optional parseable field (Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) = std::env::var($key) {
            match v.trim().parse() {
                Ok(parsed) => $config.$section.$field = Some(parsed),
                Err(_) => return Err(ConfigLoadError::InvalidOverride { key: $key, value: v }),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: GAMBIT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> Result<CentralConfig, ConfigLoadError> {
    // Common
    env_override!(config, common.log_level, "GAMBIT_COMMON_LOG_LEVEL");

    // Search
    env_override!(config, search.algorithm, "GAMBIT_SEARCH_ALGORITHM");
    env_override!(config, search.depth, "GAMBIT_SEARCH_DEPTH", parse);
    env_override!(config, search.evaluator, "GAMBIT_SEARCH_EVALUATOR");

    // Reflex
    env_override!(config, reflex.seed, "GAMBIT_REFLEX_SEED", optional_parse);

    // Episode
    env_override!(config, episode.layout, "GAMBIT_EPISODE_LAYOUT");
    env_override!(config, episode.games, "GAMBIT_EPISODE_GAMES", parse);
    env_override!(config, episode.max_moves, "GAMBIT_EPISODE_MAX_MOVES", parse);
    env_override!(config, episode.seed, "GAMBIT_EPISODE_SEED", parse);

    Ok(config)
}
