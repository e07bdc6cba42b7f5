//! Environment capability set consumed by the search engines
//!
//! A state is an immutable snapshot: every transition produces a new value and
//! the search never mutates a state it has been handed.

use std::fmt::Debug;

/// Position of an agent in turn order.
pub type AgentIndex = usize;

/// Real-valued desirability of a state, from the maximizing agent's point of view.
pub type Score = f64;

/// The distinguished (maximizing) agent.
pub const MAXIMIZER: AgentIndex = 0;

/// Main trait for environments searched by the engine
///
/// Agent 0 is always the maximizing agent; every other agent is a minimizing
/// adversary. Implementations must be deterministic: generating the successor of
/// the same state with the same action always yields an equal state.
///
/// # Example
///
/// ```rust
/// use engine_core::{AdversarialState, AgentIndex, Score, TransitionError};
///
/// /// A countdown where agent 0 wins by reaching zero on its own move.
/// #[derive(Debug, Clone)]
/// struct Countdown {
///     remaining: u32,
///     to_move: AgentIndex,
/// }
///
/// impl AdversarialState for Countdown {
///     type Action = u32;
///
///     fn legal_actions(&self, agent: AgentIndex) -> Vec<u32> {
///         if self.is_terminal() || agent != self.to_move {
///             return Vec::new();
///         }
///         (1..=self.remaining.min(2)).collect()
///     }
///
///     fn generate_successor(&self, agent: AgentIndex, action: &u32) -> Result<Self, TransitionError> {
///         if agent != self.to_move {
///             return Err(TransitionError::OutOfTurn { agent, expected: self.to_move });
///         }
///         Ok(Countdown {
///             remaining: self.remaining - action,
///             to_move: (agent + 1) % 2,
///         })
///     }
///
///     fn num_agents(&self) -> usize {
///         2
///     }
///
///     fn is_win(&self) -> bool {
///         self.remaining == 0 && self.to_move == 1
///     }
///
///     fn is_lose(&self) -> bool {
///         self.remaining == 0 && self.to_move == 0
///     }
///
///     fn score(&self) -> Score {
///         if self.is_win() { 1.0 } else if self.is_lose() { -1.0 } else { 0.0 }
///     }
/// }
///
/// let start = Countdown { remaining: 3, to_move: 0 };
/// assert_eq!(start.legal_actions(0), vec![1, 2]);
/// assert!(start.legal_actions(1).is_empty());
/// ```
pub trait AdversarialState: Sized {
    /// Opaque action token handed back to `generate_successor`
    type Action: Clone + Debug;

    /// Legal actions for `agent` in this state.
    ///
    /// May be empty only when the state is terminal. An empty list at a
    /// non-terminal state is a contract violation reported by the search.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state reached when `agent` takes `action`. Never mutates `self`.
    fn generate_successor(
        &self,
        agent: AgentIndex,
        action: &Self::Action,
    ) -> Result<Self, TransitionError>;

    /// Number of agents taking turns, always at least one.
    fn num_agents(&self) -> usize;

    /// The maximizing agent has won.
    fn is_win(&self) -> bool;

    /// The maximizing agent has lost.
    fn is_lose(&self) -> bool;

    /// The environment's own built-in score for this state.
    fn score(&self) -> Score;

    /// Win or lose; the search never expands past a terminal state.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Error type for state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Agent {agent} does not exist (environment has {num_agents} agents)")]
    UnknownAgent {
        agent: AgentIndex,
        num_agents: usize,
    },
    #[error("Illegal action {action} for agent {agent}")]
    IllegalAction { agent: AgentIndex, action: String },
    #[error("Agent {agent} moved out of turn, expected agent {expected}")]
    OutOfTurn {
        agent: AgentIndex,
        expected: AgentIndex,
    },
    #[error("No transitions exist from a terminal state")]
    TerminalState,
}
