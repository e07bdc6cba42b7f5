//! Search configuration parameters.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors detected while configuring an agent. Raised at construction, never mid-search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Depth limit must be a positive number of rounds, got {depth}")]
    InvalidDepth { depth: u32 },

    #[error("Unknown evaluation function '{name}' (available: {available})")]
    UnknownEvaluator { name: String, available: String },

    #[error("Unknown search algorithm '{0}', expected 'minimax' or 'alphabeta'")]
    UnknownAlgorithm(String),
}

/// Which recursive search backs the root selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Plain depth-limited minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

/// Configuration for a search agent.
///
/// The evaluator is referenced by name here and resolved against an
/// [`crate::EvaluatorRegistry`] when the agent is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Depth limit in full rounds (every agent moves once per unit).
    pub depth: u32,

    /// Recursive search variant.
    pub algorithm: Algorithm,

    /// Registry name of the leaf evaluation function.
    pub evaluator: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            algorithm: Algorithm::AlphaBeta,
            evaluator: "score".to_string(),
        }
    }
}

impl SearchConfig {
    /// Create a shallow config for testing.
    pub fn for_testing() -> Self {
        Self {
            depth: 1,
            ..Self::default()
        }
    }

    /// Builder pattern: set depth limit.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: set search algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builder pattern: set evaluator name.
    pub fn with_evaluator(mut self, name: impl Into<String>) -> Self {
        self.evaluator = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_depth(self.depth)
    }
}

pub(crate) fn validate_depth(depth: u32) -> Result<(), ConfigError> {
    if depth == 0 {
        return Err(ConfigError::InvalidDepth { depth });
    }
    Ok(())
}
