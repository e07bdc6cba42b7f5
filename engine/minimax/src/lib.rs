//! Depth-limited adversarial search for turn-based multi-agent games.
//!
//! This crate chooses actions for agent 0 (the maximizer) in any environment
//! implementing the `engine-core` [`AdversarialState`] trait. Every other agent
//! is a minimizing adversary.
//!
//! # Overview
//!
//! Agents move in index order `0, 1, ..., n-1` and one unit of depth is one
//! full round. A node is a leaf once the depth limit is reached or the state
//! is a win or a loss; leaves are scored by an [`Evaluator`].
//!
//! - [`MinimaxSearch`]: exhaustive depth-limited minimax
//! - [`AlphaBetaSearch`]: the same values with alpha-beta pruning
//! - [`ReflexAgent`]: one-ply heuristic with seeded tie breaking
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use engine_core::{GameTree, TreeState};
//! use minimax::{Agent, SearchAgent, ScoreEvaluator};
//!
//! let mut b = GameTree::builder(2);
//! let x = b.child(b.root(), "X", 0.0);
//! b.leaves(x, "x", &[5.0, 2.0]);
//! let y = b.child(b.root(), "Y", 0.0);
//! b.leaves(y, "y", &[8.0, 1.0]);
//! let state = Arc::new(b.build()).root_state();
//!
//! let mut agent = SearchAgent::<TreeState>::alpha_beta(1, Arc::new(ScoreEvaluator)).unwrap();
//! assert_eq!(agent.get_action(&state).unwrap(), "X");
//! ```
//!
//! # Evaluators
//!
//! Agents are configured by evaluator name and resolve it through an
//! [`EvaluatorRegistry`] when they are built:
//!
//! - `score`: the environment's built-in score
//! - `better` / `proximity`: score plus food and adversary distance terms
//!   (grid environments only)

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod evaluator;
pub mod minimax;
pub mod reflex;
pub mod registry;
pub mod search;

// Re-export main types
pub use agent::{Agent, SearchAgent};
pub use alphabeta::AlphaBetaSearch;
pub use config::{Algorithm, ConfigError, SearchConfig};
pub use evaluator::{
    adversary_penalty, closest_distance, reflex_score, Evaluator, ProximityEvaluator, ScoreEvaluator,
    DISQUALIFIED,
};
pub use minimax::MinimaxSearch;
pub use reflex::ReflexAgent;
pub use registry::{EvaluatorRef, EvaluatorRegistry};
pub use search::{select_root_action, Search, SearchError, SearchResult, SearchStats};

#[doc(no_inline)]
pub use engine_core::AdversarialState;
