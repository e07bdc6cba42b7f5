//! One-ply reflex agent.
//!
//! Scores every legal action by the heuristic value of its successor and picks
//! uniformly among the best. The random source is injected so games can be
//! replayed from a seed.

use engine_core::{AdversarialState, GridFeatures, Score, MAXIMIZER};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::agent::Agent;
use crate::evaluator::reflex_score;
use crate::search::SearchError;

#[derive(Debug, Clone)]
pub struct ReflexAgent {
    rng: ChaCha20Rng,
}

impl ReflexAgent {
    pub fn new(rng: ChaCha20Rng) -> Self {
        Self { rng }
    }

    /// Create with a specific seed for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<S: AdversarialState + GridFeatures> Agent<S> for ReflexAgent {
    fn get_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalRoot);
        }

        let mut best_score = Score::NEG_INFINITY;
        let mut best: Vec<S::Action> = Vec::new();
        for action in state.legal_actions(MAXIMIZER) {
            let successor = state.generate_successor(MAXIMIZER, &action)?;
            let score = reflex_score(&successor);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(action);
            } else if score == best_score {
                best.push(action);
            }
        }

        let tied = best.len();
        let action = best
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::NoLegalActions {
                agent: MAXIMIZER,
                depth: 0,
            })?;
        debug!(action = ?action, score = best_score, tied, "Reflex action chosen");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Position, TransitionError};

    /// Agent on a line: moving left or right by one, with fixed food and a ghost.
    #[derive(Debug, Clone)]
    struct Line {
        agent: i32,
        food: Vec<i32>,
        ghost: Option<i32>,
        terminal: bool,
        stuck: bool,
    }

    impl Line {
        fn new(agent: i32, food: &[i32], ghost: Option<i32>) -> Self {
            Self {
                agent,
                food: food.to_vec(),
                ghost,
                terminal: false,
                stuck: false,
            }
        }
    }

    impl AdversarialState for Line {
        type Action = i32;

        fn legal_actions(&self, _agent: usize) -> Vec<i32> {
            if self.stuck {
                Vec::new()
            } else {
                vec![-1, 0, 1]
            }
        }

        fn generate_successor(&self, _agent: usize, step: &i32) -> Result<Self, TransitionError> {
            let mut next = self.clone();
            next.agent += step;
            Ok(next)
        }

        fn num_agents(&self) -> usize {
            2
        }

        fn is_win(&self) -> bool {
            self.terminal
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> Score {
            0.0
        }
    }

    impl GridFeatures for Line {
        fn agent_position(&self) -> Position {
            Position::new(self.agent, 0)
        }

        fn food_positions(&self) -> Vec<Position> {
            self.food.iter().map(|&x| Position::new(x, 0)).collect()
        }

        fn adversary_positions(&self) -> Vec<Position> {
            self.ghost.iter().map(|&x| Position::new(x, 0)).collect()
        }
    }

    #[test]
    fn test_moves_toward_food() {
        let state = Line::new(0, &[3], None);
        let mut agent = ReflexAgent::with_seed(7);
        assert_eq!(agent.get_action(&state).unwrap(), 1);
    }

    #[test]
    fn test_avoids_ghost_cell() {
        // Food on the right, but the ghost sits on the cell to the right
        let state = Line::new(0, &[5], Some(1));
        let mut agent = ReflexAgent::with_seed(7);
        assert_eq!(agent.get_action(&state).unwrap(), -1);
    }

    #[test]
    fn test_ties_are_broken_by_seeded_rng() {
        // Food symmetric on both sides: -1 and 1 tie
        let state = Line::new(0, &[-2, 2], None);

        let picks = |seed: u64| {
            let mut agent = ReflexAgent::with_seed(seed);
            (0..20).map(|_| agent.get_action(&state).unwrap()).collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
        let all: Vec<i32> = (0..8).flat_map(picks).collect();
        assert!(all.iter().all(|a| *a == -1 || *a == 1));
        assert!(all.contains(&-1) && all.contains(&1));
    }

    #[test]
    fn test_terminal_and_stuck_states_error() {
        let mut agent = ReflexAgent::with_seed(1);

        let mut terminal = Line::new(0, &[1], None);
        terminal.terminal = true;
        assert_eq!(agent.get_action(&terminal), Err(SearchError::TerminalRoot));

        let mut stuck = Line::new(0, &[1], None);
        stuck.stuck = true;
        assert_eq!(
            agent.get_action(&stuck),
            Err(SearchError::NoLegalActions { agent: 0, depth: 0 })
        );
    }
}
