//! Evaluator trait for leaf evaluation.
//!
//! An evaluator maps a state to a score from the maximizing agent's point of
//! view. Searches call it at depth-limited and terminal leaves and never
//! inspect how the score was produced.

use engine_core::{manhattan_distance, AdversarialState, GridFeatures, Position, Score};

/// Contribution of an adversary standing on the maximizing agent's cell.
///
/// Large enough to outweigh any reachable environment score, finite so that it
/// can still be summed with other terms.
pub const DISQUALIFIED: Score = -1.0e9;

/// Trait for leaf evaluation functions.
///
/// Any `Fn(&S) -> Score` closure is an evaluator.
pub trait Evaluator<S>: Send + Sync {
    fn evaluate(&self, state: &S) -> Score;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Score + Send + Sync,
{
    fn evaluate(&self, state: &S) -> Score {
        self(state)
    }
}

/// Returns the environment's built-in score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<S: AdversarialState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> Score {
        state.score()
    }
}

/// Built-in score plus a nearest-food reward and an adversary-proximity penalty.
///
/// `score + 1 / closest_food + sum(adversary_penalty)`. With no food left the
/// food distance counts as 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityEvaluator;

impl<S: AdversarialState + GridFeatures> Evaluator<S> for ProximityEvaluator {
    fn evaluate(&self, state: &S) -> Score {
        let position = state.agent_position();
        let closest_food = closest_distance(position, &state.food_positions()).unwrap_or(1);
        let food_term = 1.0 / closest_food.max(1) as Score;

        state.score() + food_term + adversary_penalty(position, &state.adversary_positions())
    }
}

/// Sum of reciprocal-distance penalties for every adversary.
///
/// Each adversary at distance `d > 0` contributes `-1 / d`; an adversary at
/// distance 0 contributes [`DISQUALIFIED`].
pub fn adversary_penalty(position: Position, adversaries: &[Position]) -> Score {
    adversaries
        .iter()
        .map(|&adversary| match manhattan_distance(position, adversary) {
            0 => DISQUALIFIED,
            d => -1.0 / d as Score,
        })
        .sum()
}

/// Manhattan distance to the nearest target, if any.
pub fn closest_distance(position: Position, targets: &[Position]) -> Option<u32> {
    targets
        .iter()
        .map(|&target| manhattan_distance(position, target))
        .min()
}

/// One-ply heuristic used by the reflex agent on the successor of an action.
///
/// `score + 1 / (1 + closest_food) + sum(adversary_penalty)`; with no food left
/// the food distance counts as 0.
pub fn reflex_score<S: AdversarialState + GridFeatures>(successor: &S) -> Score {
    let position = successor.agent_position();
    let closest_food = closest_distance(position, &successor.food_positions()).unwrap_or(0);
    let food_term = 1.0 / (1.0 + closest_food as Score);

    successor.score() + food_term + adversary_penalty(position, &successor.adversary_positions())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use engine_core::{AdversarialState, AgentIndex, GridFeatures, Position, Score, TransitionError};

    /// Frozen grid snapshot for heuristic tests.
    #[derive(Debug, Clone)]
    pub struct Snapshot {
        pub score: Score,
        pub agent: Position,
        pub food: Vec<Position>,
        pub adversaries: Vec<Position>,
    }

    impl AdversarialState for Snapshot {
        type Action = ();

        fn legal_actions(&self, _agent: AgentIndex) -> Vec<()> {
            Vec::new()
        }

        fn generate_successor(&self, _agent: AgentIndex, _action: &()) -> Result<Self, TransitionError> {
            Err(TransitionError::TerminalState)
        }

        fn num_agents(&self) -> usize {
            1 + self.adversaries.len()
        }

        fn is_win(&self) -> bool {
            false
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> Score {
            self.score
        }
    }

    impl GridFeatures for Snapshot {
        fn agent_position(&self) -> Position {
            self.agent
        }

        fn food_positions(&self) -> Vec<Position> {
            self.food.clone()
        }

        fn adversary_positions(&self) -> Vec<Position> {
            self.adversaries.clone()
        }
    }
}
