//! Minimax with alpha-beta pruning.
//!
//! Returns exactly the values plain minimax returns; it only skips subtrees
//! that cannot change the decision. Bounds are passed by value down a single
//! recursion path and never shared between siblings. Cutoffs use strict
//! comparisons (`v > beta`, `v < alpha`) so that ties are always explored the
//! same way minimax explores them.

use engine_core::{AdversarialState, AgentIndex, Score, Turn, MAXIMIZER};
use tracing::trace;

use crate::evaluator::Evaluator;
use crate::search::{expand, is_leaf, select_root_action, Search, SearchError, SearchResult, SearchStats};

/// Alpha-beta search over the same tree minimax explores.
pub struct AlphaBetaSearch<'a, S> {
    evaluator: &'a dyn Evaluator<S>,
    depth_limit: u32,
    stats: SearchStats,
}

impl<'a, S: AdversarialState> AlphaBetaSearch<'a, S> {
    pub fn new(evaluator: &'a dyn Evaluator<S>, depth_limit: u32) -> Self {
        Self {
            evaluator,
            depth_limit,
            stats: SearchStats::default(),
        }
    }

    /// Choose the maximizer's action at `state`.
    ///
    /// The root starts from `alpha = -inf, beta = +inf` and raises alpha each
    /// time a new best action is found. Beta stays infinite, so the root itself
    /// never prunes.
    pub fn run(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError> {
        select_root_action(self, state)
    }

    /// Alpha-beta value of `state` with `agent` to move after `depth` completed rounds.
    pub fn value(
        &mut self,
        agent: AgentIndex,
        depth: u32,
        state: &S,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, SearchError> {
        let num_agents = state.num_agents();
        let turn = Turn::new(agent, depth);
        self.stats.visit(turn.ply(num_agents));

        if is_leaf(depth, self.depth_limit, state) {
            self.stats.leaves += 1;
            let value = self.evaluator.evaluate(state);
            trace!(agent, depth, value, "Leaf evaluated");
            return Ok(value);
        }

        let actions = expand(state, agent, depth)?;
        let next = turn.next(num_agents);

        if agent == MAXIMIZER {
            let mut value = Score::NEG_INFINITY;
            for action in actions {
                let successor = state.generate_successor(agent, &action)?;
                value = value.max(self.value(next.agent, next.depth, &successor, alpha, beta)?);
                if value > beta {
                    self.stats.cutoffs += 1;
                    trace!(agent, depth, value, beta, "Beta cutoff");
                    return Ok(value);
                }
                alpha = alpha.max(value);
            }
            Ok(value)
        } else {
            let mut value = Score::INFINITY;
            for action in actions {
                let successor = state.generate_successor(agent, &action)?;
                value = value.min(self.value(next.agent, next.depth, &successor, alpha, beta)?);
                if value < alpha {
                    self.stats.cutoffs += 1;
                    trace!(agent, depth, value, alpha, "Alpha cutoff");
                    return Ok(value);
                }
                beta = beta.min(value);
            }
            Ok(value)
        }
    }
}

impl<S: AdversarialState> Search<S> for AlphaBetaSearch<'_, S> {
    fn child_value(&mut self, turn: Turn, successor: &S, best_so_far: Score) -> Result<Score, SearchError> {
        self.value(turn.agent, turn.depth, successor, best_so_far, Score::INFINITY)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
