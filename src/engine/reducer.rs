//! Pure state reducer for robot instructions.

use crate::models::{Grid, Instruction, RobotState};

/// Apply one instruction to the robot state under the given grid bounds.
///
/// This is a total function: no instruction ever errors. Anything that
/// cannot legally apply — a PLACE off the grid, a MOVE that would leave the
/// grid, or any movement instruction before the first successful PLACE — is
/// silently absorbed and the state comes back unchanged.
///
/// REPORT is a state no-op; emitting the report is the pipeline's job, not
/// a state mutation.
#[must_use]
pub fn reduce(grid: &Grid, state: RobotState, instruction: &Instruction) -> RobotState {
    match *instruction {
        Instruction::Place { x, y, facing } => {
            if grid.contains(x, y) {
                RobotState::Positioned { x, y, facing }
            } else {
                state
            }
        }
        Instruction::Move => match state {
            RobotState::Positioned { x, y, facing } => {
                let (dx, dy) = facing.step();
                let (nx, ny) = (x + dx, y + dy);
                if grid.contains(nx, ny) {
                    RobotState::Positioned { x: nx, y: ny, facing }
                } else {
                    // At the edge, facing outward: clamp, no wraparound.
                    state
                }
            }
            RobotState::Unpositioned => state,
        },
        Instruction::Left => turn(state, true),
        Instruction::Right => turn(state, false),
        Instruction::Report => state,
    }
}

/// Rotate a positioned robot one quarter turn; ignored while unpositioned.
fn turn(state: RobotState, left: bool) -> RobotState {
    match state {
        RobotState::Positioned { x, y, facing } => RobotState::Positioned {
            x,
            y,
            facing: if left {
                facing.turned_left()
            } else {
                facing.turned_right()
            },
        },
        RobotState::Unpositioned => state,
    }
}
