//! Unit tests for compass direction arithmetic and token parsing.

use bot_sim::models::Direction;

/// LEFT follows the cycle backwards: N→W→S→E→N.
#[test]
fn left_turns_follow_cycle_backwards() {
    assert_eq!(Direction::North.turned_left(), Direction::West);
    assert_eq!(Direction::West.turned_left(), Direction::South);
    assert_eq!(Direction::South.turned_left(), Direction::East);
    assert_eq!(Direction::East.turned_left(), Direction::North);
}

/// RIGHT follows the cycle forwards: N→E→S→W→N.
#[test]
fn right_turns_follow_cycle_forwards() {
    assert_eq!(Direction::North.turned_right(), Direction::East);
    assert_eq!(Direction::East.turned_right(), Direction::South);
    assert_eq!(Direction::South.turned_right(), Direction::West);
    assert_eq!(Direction::West.turned_right(), Direction::North);
}

/// Four consecutive turns in either direction return to the start.
#[test]
fn four_turns_round_trip() {
    for start in [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ] {
        let mut left = start;
        let mut right = start;
        for _ in 0..4 {
            left = left.turned_left();
            right = right.turned_right();
        }
        assert_eq!(left, start);
        assert_eq!(right, start);
    }
}

/// MOVE displacement per facing: N y+1, S y−1, E x+1, W x−1.
#[test]
fn step_offsets_match_facing() {
    assert_eq!(Direction::North.step(), (0, 1));
    assert_eq!(Direction::South.step(), (0, -1));
    assert_eq!(Direction::East.step(), (1, 0));
    assert_eq!(Direction::West.step(), (-1, 0));
}

/// Direction keywords render uppercase.
#[test]
fn display_is_uppercase_keyword() {
    assert_eq!(Direction::North.to_string(), "NORTH");
    assert_eq!(Direction::East.to_string(), "EAST");
    assert_eq!(Direction::South.to_string(), "SOUTH");
    assert_eq!(Direction::West.to_string(), "WEST");
}

/// Token parsing is case-insensitive but whole-word only.
#[test]
fn parse_token_is_whole_word_case_insensitive() {
    assert_eq!(Direction::parse_token("north"), Some(Direction::North));
    assert_eq!(Direction::parse_token("EAST"), Some(Direction::East));
    assert_eq!(Direction::parse_token("SoUtH"), Some(Direction::South));
    assert_eq!(Direction::parse_token("NORTHWEST"), None);
    assert_eq!(Direction::parse_token("W"), None);
    assert_eq!(Direction::parse_token(""), None);
}
