//! Typed robot instructions produced by the command parser.

use crate::models::direction::Direction;

/// One parsed command line.
///
/// Instructions are produced transiently per accepted line and consumed
/// immediately by the reducer; at most one instruction comes out of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Put the robot at `(x, y)` facing `facing`, if in bounds.
    Place {
        /// Target column.
        x: i32,
        /// Target row.
        y: i32,
        /// Target facing.
        facing: Direction,
    },
    /// Advance one grid unit in the current facing.
    Move,
    /// Rotate one quarter turn counter-clockwise.
    Left,
    /// Rotate one quarter turn clockwise.
    Right,
    /// Emit the current position, if the robot has been placed.
    Report,
}
