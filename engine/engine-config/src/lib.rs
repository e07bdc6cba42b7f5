//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! the `gambit` driver.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`GAMBIT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! GAMBIT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     GAMBIT_COMMON_LOG_LEVEL=debug
//!     GAMBIT_SEARCH_ALGORITHM=minimax
//!     GAMBIT_SEARCH_DEPTH=3
//!     GAMBIT_EPISODE_LAYOUT=duel
//!     GAMBIT_REFLEX_SEED=7
//! ```
//!
//! Unlike missing keys, which fall back to defaults, a config file that
//! cannot be read or parsed and an override that cannot be parsed are errors.

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, ConfigLoadError, CONFIG_SEARCH_PATHS};
pub use structs::*;
