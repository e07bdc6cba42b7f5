//! Turn and depth bookkeeping
//!
//! One unit of depth is a full round: every agent moves once. Depth advances
//! exactly when play wraps back around to agent 0.

use crate::state::{AgentIndex, MAXIMIZER};

/// Position in the turn sequence: the agent to move and the completed rounds so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub agent: AgentIndex,
    pub depth: u32,
}

impl Turn {
    /// The maximizer to move with no rounds completed.
    pub const ROOT: Turn = Turn {
        agent: MAXIMIZER,
        depth: 0,
    };

    pub fn new(agent: AgentIndex, depth: u32) -> Self {
        Self { agent, depth }
    }

    /// The turn after this agent moves, in an environment with `num_agents` agents.
    ///
    /// `num_agents` must be at least one.
    #[inline]
    pub fn next(self, num_agents: usize) -> Turn {
        debug_assert!(num_agents > 0, "turn accounting needs at least one agent");
        let agent = (self.agent + 1) % num_agents;
        let depth = if agent == MAXIMIZER {
            self.depth + 1
        } else {
            self.depth
        };
        Turn { agent, depth }
    }

    /// Whether the maximizing agent is to move.
    #[inline]
    pub fn is_maximizer(&self) -> bool {
        self.agent == MAXIMIZER
    }

    /// Number of single-agent moves made from the root to reach this turn.
    pub fn ply(&self, num_agents: usize) -> u32 {
        self.depth * num_agents as u32 + self.agent as u32
    }
}
