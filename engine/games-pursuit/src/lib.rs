//! Grid pursuit game for adversarial search
//!
//! One forager (agent 0) collects food in a maze while chasers (agents
//! `1..n`) try to catch it. The forager wins by clearing every food cell and
//! loses when a chaser shares its cell.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use engine_core::AdversarialState;
//! use games_pursuit::{Direction, Layout, PursuitState};
//!
//! let layout = Arc::new(Layout::named("tiny").unwrap());
//! let state = PursuitState::new(layout);
//! assert_eq!(state.num_agents(), 2);
//!
//! let next = state.generate_successor(0, &Direction::East).unwrap();
//! assert_eq!(next.score(), -1.0);
//! ```
//!
//! # Scoring
//!
//! - `-1` for every forager move (including `Stop`)
//! - `+10` per food eaten
//! - `+500` when the last food is eaten (win)
//! - `-500` when a chaser catches the forager (loss)

mod layout;

pub use layout::{Layout, LayoutError, LAYOUTS};

use std::fmt;
use std::sync::Arc;

use engine_core::{AdversarialState, AgentIndex, GridFeatures, Outcome, Position, Score, TransitionError};

/// Score lost on each forager move
pub const TIME_PENALTY: i64 = 1;
/// Score for each food cell eaten
pub const FOOD_REWARD: i64 = 10;
/// Bonus when all food is gone
pub const WIN_BONUS: i64 = 500;
/// Penalty when a chaser catches the forager
pub const CATCH_PENALTY: i64 = 500;

/// A move on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Enumeration order of legal actions.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// Cell offset; north is toward row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}

/// Game state
///
/// Immutable: successors are fresh values and the layout is shared. Agents
/// are not forced to move in order; the search drives the turn order.
#[derive(Debug, Clone, PartialEq)]
pub struct PursuitState {
    layout: Arc<Layout>,
    forager: Position,
    chasers: Vec<Position>,
    /// Remaining food, sorted
    food: Vec<Position>,
    score: i64,
    outcome: Outcome,
    moves: u32,
}

impl PursuitState {
    /// Starting state of `layout`.
    pub fn new(layout: Arc<Layout>) -> Self {
        Self {
            forager: layout.forager_start(),
            chasers: layout.chaser_starts().to_vec(),
            food: layout.food().to_vec(),
            score: 0,
            outcome: Outcome::Ongoing,
            moves: 0,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn forager(&self) -> Position {
        self.forager
    }

    pub fn chasers(&self) -> &[Position] {
        &self.chasers
    }

    pub fn food_remaining(&self) -> usize {
        self.food.len()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Integer game score.
    pub fn points(&self) -> i64 {
        self.score
    }

    /// Forager moves made so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    fn position_of(&self, agent: AgentIndex) -> Position {
        if agent == 0 {
            self.forager
        } else {
            self.chasers[agent - 1]
        }
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |&direction| {
            let (dx, dy) = direction.delta();
            direction != Direction::Stop && !self.layout.is_wall(from.offset(dx, dy))
        })
    }

    fn check_catch(&mut self) {
        if self.outcome == Outcome::Ongoing && self.chasers.contains(&self.forager) {
            self.score -= CATCH_PENALTY;
            self.outcome = Outcome::Lose;
        }
    }
}

impl AdversarialState for PursuitState {
    type Action = Direction;

    /// The forager may always `Stop`; chasers only when boxed in.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if agent >= self.num_agents() || self.is_terminal() {
            return Vec::new();
        }

        let mut actions: Vec<Direction> = self.open_moves(self.position_of(agent)).collect();
        if agent == 0 || actions.is_empty() {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn generate_successor(&self, agent: AgentIndex, action: &Direction) -> Result<Self, TransitionError> {
        let num_agents = self.num_agents();
        if agent >= num_agents {
            return Err(TransitionError::UnknownAgent { agent, num_agents });
        }
        if self.is_terminal() {
            return Err(TransitionError::TerminalState);
        }
        if !self.legal_actions(agent).contains(action) {
            return Err(TransitionError::IllegalAction {
                agent,
                action: action.to_string(),
            });
        }

        let mut next = self.clone();
        let (dx, dy) = action.delta();
        if agent == 0 {
            next.forager = self.forager.offset(dx, dy);
            next.score -= TIME_PENALTY;
            next.moves += 1;
            if let Ok(index) = next.food.binary_search(&next.forager) {
                next.food.remove(index);
                next.score += FOOD_REWARD;
                if next.food.is_empty() {
                    next.score += WIN_BONUS;
                    next.outcome = Outcome::Win;
                }
            }
        } else {
            next.chasers[agent - 1] = self.chasers[agent - 1].offset(dx, dy);
        }
        next.check_catch();
        Ok(next)
    }

    fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lose
    }

    fn score(&self) -> Score {
        self.score as Score
    }
}

impl GridFeatures for PursuitState {
    fn agent_position(&self) -> Position {
        self.forager
    }

    fn food_positions(&self) -> Vec<Position> {
        self.food.clone()
    }

    fn adversary_positions(&self) -> Vec<Position> {
        self.chasers.clone()
    }
}

impl fmt::Display for PursuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.layout.height() {
            for x in 0..self.layout.width() {
                let position = Position::new(x as i32, y as i32);
                let ch = if self.layout.is_wall(position) {
                    '%'
                } else if self.chasers.contains(&position) {
                    'G'
                } else if position == self.forager {
                    'P'
                } else if self.food.binary_search(&position).is_ok() {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests;
