//! Maze layouts
//!
//! A layout is a rectangle of characters, one row per line:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `%`  | wall |
//! | `.`  | food |
//! | `P`  | forager start (exactly one) |
//! | `G`  | chaser start (any number, agent order is reading order) |
//! | ` `  | open floor |

use std::fmt;
use std::str::FromStr;

use engine_core::Position;
use thiserror::Error;

/// Errors raised while parsing a layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Row {row} has width {width}, expected {expected}")]
    Ragged { row: usize, width: usize, expected: usize },

    #[error("Unexpected character {ch:?} at {position}")]
    UnknownCell { ch: char, position: Position },

    #[error("Layout needs exactly one forager 'P', found {found}")]
    ForagerCount { found: usize },

    #[error("Unknown layout '{name}' (available: {available})")]
    UnknownName { name: String, available: String },
}

const TINY: &str = "\
%%%%%%%
%P . G%
%%%%%%%";

const TRAPPED: &str = "\
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%";

const OPEN: &str = "\
%%%%%%%%%%
%P.......%
%.%%..%%.%
%........%
%.%%..%%.%
%.......G%
%%%%%%%%%%";

const DUEL: &str = "\
%%%%%%%%%%%
%P...%...G%
%.%%.%.%%.%
%.........%
%.%%.%.%%.%
%G...%....%
%%%%%%%%%%%";

/// Built-in layouts by name
pub const LAYOUTS: &[(&str, &str)] = &[
    ("tiny", TINY),
    ("trapped", TRAPPED),
    ("open", OPEN),
    ("duel", DUEL),
];

/// Static maze description: walls plus the starting positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    food: Vec<Position>,
    forager: Position,
    chasers: Vec<Position>,
}

impl Layout {
    /// Parse a layout from its text form.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let expected = rows.first().map(|row| row.chars().count()).ok_or(LayoutError::Empty)?;

        let mut walls = Vec::with_capacity(expected * rows.len());
        let mut food = Vec::new();
        let mut foragers = Vec::new();
        let mut chasers = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != expected {
                return Err(LayoutError::Ragged { row: y, width, expected });
            }
            for (x, ch) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                walls.push(ch == '%');
                match ch {
                    '%' | ' ' => {}
                    '.' => food.push(position),
                    'P' => foragers.push(position),
                    'G' => chasers.push(position),
                    _ => return Err(LayoutError::UnknownCell { ch, position }),
                }
            }
        }

        let forager = match foragers.as_slice() {
            [only] => *only,
            _ => return Err(LayoutError::ForagerCount { found: foragers.len() }),
        };

        food.sort();
        Ok(Self {
            width: expected,
            height: rows.len(),
            walls,
            food,
            forager,
            chasers,
        })
    }

    /// Look up a built-in layout.
    pub fn named(name: &str) -> Result<Self, LayoutError> {
        let (_, text) = LAYOUTS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .ok_or_else(|| LayoutError::UnknownName {
                name: name.to_string(),
                available: Self::names().join(", "),
            })?;
        Self::parse(text)
    }

    pub fn names() -> Vec<&'static str> {
        LAYOUTS.iter().map(|(name, _)| *name).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells outside the rectangle count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        match self.index(position) {
            Some(index) => self.walls[index],
            None => true,
        }
    }

    /// Initial food cells in sorted order.
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn forager_start(&self) -> Position {
        self.forager
    }

    pub fn chaser_starts(&self) -> &[Position] {
        &self.chasers
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let position = Position::new(x as i32, y as i32);
                let ch = if self.walls[y * self.width + x] {
                    '%'
                } else if position == self.forager {
                    'P'
                } else if self.chasers.contains(&position) {
                    'G'
                } else if self.food.binary_search(&position).is_ok() {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
