//! Agents that pick the maximizer's next action.

use std::fmt;

use engine_core::AdversarialState;
use tracing::debug;

use crate::alphabeta::AlphaBetaSearch;
use crate::config::{validate_depth, Algorithm, ConfigError, SearchConfig};
use crate::minimax::MinimaxSearch;
use crate::registry::{EvaluatorRef, EvaluatorRegistry};
use crate::search::{SearchError, SearchResult};

/// Something that can choose an action for agent 0.
pub trait Agent<S: AdversarialState> {
    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError>;
}

/// Depth-limited adversarial search agent.
///
/// Holds a validated depth and a resolved evaluator; every decision builds a
/// fresh search so no state leaks between calls.
pub struct SearchAgent<S> {
    algorithm: Algorithm,
    depth: u32,
    evaluator: EvaluatorRef<S>,
}

impl<S> fmt::Debug for SearchAgent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchAgent")
            .field("algorithm", &self.algorithm)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<S: AdversarialState> SearchAgent<S> {
    pub fn new(algorithm: Algorithm, depth: u32, evaluator: EvaluatorRef<S>) -> Result<Self, ConfigError> {
        validate_depth(depth)?;
        Ok(Self {
            algorithm,
            depth,
            evaluator,
        })
    }

    pub fn minimax(depth: u32, evaluator: EvaluatorRef<S>) -> Result<Self, ConfigError> {
        Self::new(Algorithm::Minimax, depth, evaluator)
    }

    pub fn alpha_beta(depth: u32, evaluator: EvaluatorRef<S>) -> Result<Self, ConfigError> {
        Self::new(Algorithm::AlphaBeta, depth, evaluator)
    }

    /// Build an agent from a config, resolving the evaluator name against `registry`.
    pub fn from_config(config: &SearchConfig, registry: &EvaluatorRegistry<S>) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluator = registry.resolve(&config.evaluator)?;
        Self::new(config.algorithm, config.depth, evaluator)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Run one search from `state` and return the full result.
    pub fn decide(&self, state: &S) -> Result<SearchResult<S::Action>, SearchError> {
        let evaluator = self.evaluator.as_ref();
        let result = match self.algorithm {
            Algorithm::Minimax => MinimaxSearch::new(evaluator, self.depth).run(state)?,
            Algorithm::AlphaBeta => AlphaBetaSearch::new(evaluator, self.depth).run(state)?,
        };

        debug!(
            algorithm = %self.algorithm,
            depth = self.depth,
            action = ?result.action,
            value = result.value,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            "Search complete"
        );
        Ok(result)
    }
}

impl<S: AdversarialState> Agent<S> for SearchAgent<S> {
    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        self.decide(state).map(|result| result.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::ScoreEvaluator;
    use engine_core::{GameTree, TreeState};
    use std::sync::Arc;

    fn scenario() -> TreeState {
        let mut b = GameTree::builder(2);
        let x = b.child(b.root(), "X", 0.0);
        b.leaves(x, "x", &[5.0, 2.0]);
        let y = b.child(b.root(), "Y", 0.0);
        b.leaves(y, "y", &[8.0, 1.0]);
        Arc::new(b.build()).root_state()
    }

    #[test]
    fn test_zero_depth_rejected_at_construction() {
        let err = SearchAgent::<TreeState>::minimax(0, Arc::new(ScoreEvaluator)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDepth { depth: 0 });
    }

    #[test]
    fn test_unknown_evaluator_rejected_at_construction() {
        let registry = EvaluatorRegistry::<TreeState>::with_defaults();
        let config = SearchConfig::default().with_evaluator("nope");
        let err = SearchAgent::from_config(&config, &registry).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEvaluator { .. }));
    }

    #[test]
    fn test_both_algorithms_agree() {
        let state = scenario();
        let mut minimax = SearchAgent::<TreeState>::minimax(1, Arc::new(ScoreEvaluator)).unwrap();
        let mut alphabeta = SearchAgent::<TreeState>::alpha_beta(1, Arc::new(ScoreEvaluator)).unwrap();

        assert_eq!(minimax.get_action(&state).unwrap(), "X");
        assert_eq!(alphabeta.get_action(&state).unwrap(), "X");
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let state = scenario();
        let agent = SearchAgent::<TreeState>::alpha_beta(1, Arc::new(ScoreEvaluator)).unwrap();
        let first = agent.decide(&state).unwrap();
        let second = agent.decide(&state).unwrap();

        assert_eq!(first.action, second.action);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_from_config() {
        let registry = EvaluatorRegistry::<TreeState>::with_defaults();
        let config = SearchConfig::for_testing().with_algorithm(Algorithm::Minimax);
        let agent = SearchAgent::from_config(&config, &registry).unwrap();

        assert_eq!(agent.algorithm(), Algorithm::Minimax);
        assert_eq!(agent.depth(), 1);
        assert!((agent.decide(&scenario()).unwrap().value - 2.0).abs() < 1e-12);
    }
}
