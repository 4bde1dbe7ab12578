//! Compass directions and turn arithmetic.

use std::fmt::{Display, Formatter};

/// One of the four compass directions, cyclically ordered N→E→S→W→N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Facing up the grid (increasing y).
    North,
    /// Facing right (increasing x).
    East,
    /// Facing down the grid (decreasing y).
    South,
    /// Facing left (decreasing x).
    West,
}

/// The four directions in turn order.
const CYCLE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Position of this direction within the N→E→S→W cycle.
    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The direction one quarter turn counter-clockwise.
    ///
    /// Adding 3 instead of subtracting 1 keeps the intermediate index
    /// non-negative before the modulo.
    #[must_use]
    pub fn turned_left(self) -> Self {
        CYCLE[(self.index() + 3) % 4]
    }

    /// The direction one quarter turn clockwise.
    #[must_use]
    pub fn turned_right(self) -> Self {
        CYCLE[(self.index() + 1) % 4]
    }

    /// Unit displacement `(dx, dy)` of one MOVE while facing this direction.
    #[must_use]
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Uppercase keyword form of this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Parse a direction keyword, case-insensitively, as a whole token.
    ///
    /// Returns `None` for anything that is not exactly one of the four
    /// keywords (`"NORTHWEST"` and `"N"` both fail).
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        CYCLE
            .into_iter()
            .find(|dir| token.eq_ignore_ascii_case(dir.as_str()))
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
