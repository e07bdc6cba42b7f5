//! Core traits and types for the Gambit adversarial search engine
//!
//! This crate provides the abstractions every search algorithm is written against:
//! - `AdversarialState`: the environment capability set (legal actions, successors,
//!   agent count, terminal checks, built-in score)
//! - `Turn`: pure turn/depth bookkeeping shared by all search variants
//! - `GridFeatures`: optional positional features consumed by proximity heuristics
//! - `GameTree`: an explicit synthetic game tree for exercising search engines

pub mod grid;
pub mod state;
pub mod tree;
pub mod turn;

// Re-export main types for convenience
pub use grid::{manhattan_distance, GridFeatures, Position};
pub use state::{AdversarialState, AgentIndex, Score, TransitionError, MAXIMIZER};
pub use tree::{GameTree, NodeId, Outcome, RandomTreeSpec, TreeBuilder, TreeState};
pub use turn::Turn;
