//! Command line parser.
//!
//! Turns one logical line of text into at most one [`Instruction`]. The
//! grammar is deliberately strict about token boundaries: a keyword must
//! match the whole token (`MOVEX` is not a MOVE, and trailing content after
//! a simple keyword rejects the line), while being permissive about case
//! and surrounding whitespace.
//!
//! Only lexical and grammatical well-formedness is checked here. Whether a
//! PLACE target is actually on the grid is the reducer's concern
//! ([`crate::engine::reducer`]), so an off-grid `PLACE 9,9,NORTH` parses
//! fine and is ignored later.

use crate::models::{Direction, Instruction};

/// Parse one logical line into an instruction.
///
/// Returns `None` for empty, whitespace-only, and malformed lines — the
/// pipeline tolerates noisy input by silently dropping anything it does not
/// understand.
#[must_use]
pub fn parse_line(line: &str) -> Option<Instruction> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Split the keyword from any parameter text at the first whitespace.
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed, ""),
    };

    if keyword.eq_ignore_ascii_case("PLACE") {
        return parse_place_params(rest);
    }

    // Simple keywords take no parameters; any trailing token is a reject.
    if !rest.is_empty() {
        return None;
    }

    if keyword.eq_ignore_ascii_case("MOVE") {
        Some(Instruction::Move)
    } else if keyword.eq_ignore_ascii_case("LEFT") {
        Some(Instruction::Left)
    } else if keyword.eq_ignore_ascii_case("RIGHT") {
        Some(Instruction::Right)
    } else if keyword.eq_ignore_ascii_case("REPORT") {
        Some(Instruction::Report)
    } else {
        None
    }
}

/// Parse the `x,y,facing` parameter list of a PLACE.
///
/// Exactly three comma-separated fields with arbitrary whitespace around
/// the commas; any missing or malformed field rejects the whole line rather
/// than partially applying.
fn parse_place_params(params: &str) -> Option<Instruction> {
    let mut fields = params.split(',');
    let x = parse_coordinate(fields.next()?)?;
    let y = parse_coordinate(fields.next()?)?;
    let facing = Direction::parse_token(fields.next()?.trim())?;
    if fields.next().is_some() {
        return None;
    }
    Some(Instruction::Place { x, y, facing })
}

/// Parse a non-negative base-10 integer literal.
///
/// No sign, no decimal point, digits only. Literals that overflow `i32`
/// reject the line; such a coordinate could never be on any grid anyway.
fn parse_coordinate(field: &str) -> Option<i32> {
    let token = field.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
