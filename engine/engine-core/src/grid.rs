//! Positional features for grid environments
//!
//! Proximity heuristics only need positions, so environments opt in by
//! implementing [`GridFeatures`] next to [`crate::AdversarialState`].

use std::fmt;

/// A cell on a grid. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan (L1) distance between two cells.
///
/// # Example
/// ```
/// use engine_core::{manhattan_distance, Position};
///
/// assert_eq!(manhattan_distance(Position::new(1, 1), Position::new(4, -1)), 5);
/// assert_eq!(manhattan_distance(Position::new(2, 2), Position::new(2, 2)), 0);
/// ```
#[inline]
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Positions of the maximizing agent, its targets, and its adversaries.
pub trait GridFeatures {
    /// Where the maximizing agent stands.
    fn agent_position(&self) -> Position;

    /// Remaining (uneaten) food cells.
    fn food_positions(&self) -> Vec<Position>;

    /// Positions of every adversary, in agent order (agent 1 first).
    fn adversary_positions(&self) -> Vec<Position>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Position::new(-3, 7);
        let b = Position::new(5, 2);
        assert_eq!(manhattan_distance(a, b), 13);
        assert_eq!(manhattan_distance(b, a), 13);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Position::new(1, 1).offset(0, -1), Position::new(1, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
