//! Grid bounds and robot state.

use crate::models::direction::Direction;

/// Immutable rectangular grid bounds, fixed for the lifetime of one run.
///
/// Valid coordinates are `0 ≤ x < width` and `0 ≤ y < height` — the upper
/// bound is exclusive, so the default 5×5 grid has corners at `(0, 0)` and
/// `(4, 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid with the given dimensions.
    ///
    /// Dimension validation happens at configuration time
    /// ([`crate::GlobalConfig::validate`]); both values are expected to be
    /// positive here.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies on the grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Default for Grid {
    /// The classic 5×5 grid.
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Robot state as a sum type.
///
/// Coordinates and facing only exist in the [`Positioned`](Self::Positioned)
/// variant, so no code path can observe a facing without a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    /// No successful PLACE has happened yet; every instruction except a
    /// valid PLACE is ignored in this state.
    Unpositioned,
    /// On the grid at `(x, y)`, looking towards `facing`.
    Positioned {
        /// Current column; always within the grid in effect.
        x: i32,
        /// Current row; always within the grid in effect.
        y: i32,
        /// Current facing.
        facing: Direction,
    },
}
