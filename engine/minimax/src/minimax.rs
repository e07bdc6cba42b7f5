//! Depth-limited minimax search.

use engine_core::{AdversarialState, AgentIndex, Score, Turn, MAXIMIZER};
use tracing::trace;

use crate::evaluator::Evaluator;
use crate::search::{expand, is_leaf, select_root_action, Search, SearchError, SearchResult, SearchStats};

/// Plain minimax: agent 0 maximizes, every other agent minimizes.
pub struct MinimaxSearch<'a, S> {
    evaluator: &'a dyn Evaluator<S>,
    depth_limit: u32,
    stats: SearchStats,
}

impl<'a, S: AdversarialState> MinimaxSearch<'a, S> {
    pub fn new(evaluator: &'a dyn Evaluator<S>, depth_limit: u32) -> Self {
        Self {
            evaluator,
            depth_limit,
            stats: SearchStats::default(),
        }
    }

    /// Choose the maximizer's action at `state`.
    pub fn run(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError> {
        select_root_action(self, state)
    }

    /// Minimax value of `state` with `agent` to move after `depth` completed rounds.
    pub fn value(&mut self, agent: AgentIndex, depth: u32, state: &S) -> Result<Score, SearchError> {
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
                value = value.max(self.value(next.agent, next.depth, &successor)?);
            }
            Ok(value)
        } else {
            let mut value = Score::INFINITY;
            for action in actions {
                let successor = state.generate_successor(agent, &action)?;
                value = value.min(self.value(next.agent, next.depth, &successor)?);
            }
            Ok(value)
        }
    }
}

impl<S: AdversarialState> Search<S> for MinimaxSearch<'_, S> {
    fn child_value(&mut self, turn: Turn, successor: &S, _best_so_far: Score) -> Result<Score, SearchError> {
        self.value(turn.agent, turn.depth, successor)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
