//! Report formatter.

use crate::models::RobotState;

/// Render the current position as a report line, without its terminator.
///
/// Returns `None` while the robot is unpositioned — a REPORT before any
/// successful PLACE emits nothing at all. The pipeline writer appends the
/// `\n` delimiter.
#[must_use]
pub fn format_report(state: &RobotState) -> Option<String> {
    match *state {
        RobotState::Unpositioned => None,
        RobotState::Positioned { x, y, facing } => Some(format!("{x},{y},{facing}")),
    }
}
