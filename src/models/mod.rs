//! Domain model module declarations.

pub mod direction;
pub mod instruction;
pub mod robot;

pub use direction::Direction;
pub use instruction::Instruction;
pub use robot::{Grid, RobotState};
