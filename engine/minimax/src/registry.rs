//! Named evaluation functions resolved at agent construction time
//!
//! Agents are configured with an evaluator name. The name is looked up once,
//! when the agent is built, and the search only ever holds the resolved handle.

use std::collections::BTreeMap;
use std::sync::Arc;

use engine_core::{AdversarialState, GridFeatures};
use tracing::warn;

use crate::config::ConfigError;
use crate::evaluator::{Evaluator, ProximityEvaluator, ScoreEvaluator};

/// Shared handle to an evaluator.
pub type EvaluatorRef<S> = Arc<dyn Evaluator<S>>;

/// Mapping from evaluator names to evaluators for states of type `S`
pub struct EvaluatorRegistry<S> {
    entries: BTreeMap<String, EvaluatorRef<S>>,
}

impl<S> std::fmt::Debug for EvaluatorRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl<S> EvaluatorRegistry<S> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register an evaluator under `name`, replacing any previous registration.
    pub fn register<E>(&mut self, name: impl Into<String>, evaluator: E) -> &mut Self
    where
        E: Evaluator<S> + 'static,
    {
        self.register_shared(name, Arc::new(evaluator))
    }

    /// Register an already shared evaluator under `name`.
    pub fn register_shared(&mut self, name: impl Into<String>, evaluator: EvaluatorRef<S>) -> &mut Self {
        let name = name.into();
        if self.entries.contains_key(&name) {
            warn!(evaluator = %name, "Overriding existing evaluator registration");
        }
        self.entries.insert(name, evaluator);
        self
    }

    /// Look up an evaluator by name.
    pub fn resolve(&self, name: &str) -> Result<EvaluatorRef<S>, ConfigError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEvaluator {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<S: AdversarialState> EvaluatorRegistry<S> {
    /// Registry holding `score`, the environment's built-in score.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("score", ScoreEvaluator);
        registry
    }
}

impl<S: AdversarialState + GridFeatures> EvaluatorRegistry<S> {
    /// Defaults plus the proximity heuristic as `better` (alias `proximity`).
    pub fn with_grid_defaults() -> Self {
        let mut registry = Self::with_defaults();
        let proximity: EvaluatorRef<S> = Arc::new(ProximityEvaluator);
        registry.register_shared("better", Arc::clone(&proximity));
        registry.register_shared("proximity", proximity);
        registry
    }
}

impl<S: AdversarialState> Default for EvaluatorRegistry<S> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
