use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A cell on the grid. Positions compare and hash by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// The position shifted by the given offsets, or `None` if the shift
    /// leaves the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Position> {
        Some(Position::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
