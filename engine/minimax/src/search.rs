//! Shared search plumbing: errors, statistics, and the root selector.
//!
//! Both recursive searches implement [`Search`]; [`select_root_action`]
//! enumerates the maximizer's actions, asks the search for each successor's
//! value, and keeps the first action with the strictly greatest value.

use engine_core::{AdversarialState, AgentIndex, Score, TransitionError, Turn, MAXIMIZER};
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The environment reported no legal actions at a non-terminal node.
    #[error("Agent {agent} has no legal actions in a non-terminal state at depth {depth}")]
    NoLegalActions { agent: AgentIndex, depth: u32 },

    #[error("Cannot choose an action from a terminal state")]
    TerminalRoot,

    #[error("Environment reports zero agents")]
    NoAgents,

    #[error("Transition failed: {0}")]
    Transition(#[from] TransitionError),
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited, root included
    pub nodes: u64,
    /// Evaluation function calls
    pub leaves: u64,
    /// Nodes that returned before exploring every action
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_ply: u32,
}

impl SearchStats {
    pub(crate) fn visit(&mut self, ply: u32) {
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
    }
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best action for the maximizer
    pub action: A,
    /// Search value of that action
    pub value: Score,
    pub stats: SearchStats,
}

/// A recursive search the root selector can drive.
pub trait Search<S: AdversarialState> {
    /// Value of `successor` with `turn.agent` to move.
    ///
    /// `best_so_far` is the best value the root has already secured; searches
    /// that prune use it as their initial alpha.
    fn child_value(
        &mut self,
        turn: Turn,
        successor: &S,
        best_so_far: Score,
    ) -> Result<Score, SearchError>;

    fn stats(&self) -> &SearchStats;

    fn stats_mut(&mut self) -> &mut SearchStats;
}

/// Leaf test shared by every search: depth limit reached or terminal state.
#[inline]
pub(crate) fn is_leaf<S: AdversarialState>(depth: u32, depth_limit: u32, state: &S) -> bool {
    depth == depth_limit || state.is_win() || state.is_lose()
}

/// Legal actions at an interior node; an empty list means the environment
/// failed to report a terminal state.
pub(crate) fn expand<S: AdversarialState>(
    state: &S,
    agent: AgentIndex,
    depth: u32,
) -> Result<Vec<S::Action>, SearchError> {
    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions { agent, depth });
    }
    Ok(actions)
}

/// Choose the maximizer's action at `state`.
///
/// Ties keep the first action in enumeration order.
pub fn select_root_action<S, X>(
    search: &mut X,
    state: &S,
) -> Result<SearchResult<S::Action>, SearchError>
where
    S: AdversarialState,
    X: Search<S>,
{
    let num_agents = state.num_agents();
    if num_agents == 0 {
        return Err(SearchError::NoAgents);
    }
    if state.is_terminal() {
        return Err(SearchError::TerminalRoot);
    }

    search.stats_mut().visit(0);
    let actions = expand(state, MAXIMIZER, 0)?;
    let child_turn = Turn::ROOT.next(num_agents);

    let mut best: Option<(S::Action, Score)> = None;
    for action in actions {
        let successor = state.generate_successor(MAXIMIZER, &action)?;
        let best_so_far = best.as_ref().map_or(Score::NEG_INFINITY, |(_, v)| *v);
        let value = search.child_value(child_turn, &successor, best_so_far)?;
        trace!(action = ?action, value, "Root action evaluated");

        if best.is_none() || value > best_so_far {
            best = Some((action, value));
        }
    }

    // expand() guarantees at least one action
    let (action, value) = best.ok_or(SearchError::NoLegalActions {
        agent: MAXIMIZER,
        depth: 0,
    })?;

    Ok(SearchResult {
        action,
        value,
        stats: *search.stats(),
    })
}
