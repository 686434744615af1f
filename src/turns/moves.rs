//! The six turns and directed moves, with standard face notation.

use super::definition::{TurnDefinition, BACK, BOTTOM, FRONT, LEFT, RIGHT, TOP};
use crate::core::{Color, Cube, CubeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six face turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
    Top,
    Bottom,
    Front,
    Back,
}

impl Turn {
    pub const ALL: [Turn; 6] = [
        Turn::Left,
        Turn::Right,
        Turn::Top,
        Turn::Bottom,
        Turn::Front,
        Turn::Back,
    ];

    /// The table entry driving this turn.
    pub fn definition(self) -> &'static TurnDefinition {
        match self {
            Self::Left => &LEFT,
            Self::Right => &RIGHT,
            Self::Top => &TOP,
            Self::Bottom => &BOTTOM,
            Self::Front => &FRONT,
            Self::Back => &BACK,
        }
    }

    /// The face whose own grid this turn rotates.
    pub fn face(self) -> Color {
        self.definition().rotated
    }

    /// Standard notation letter (`U`/`D` for top/bottom).
    pub const fn notation(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Top => 'U',
            Self::Bottom => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
        }
    }

    fn from_notation(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|turn| turn.notation() == letter.to_ascii_uppercase())
    }
}

/// A turn together with its direction.
///
/// # Example
///
/// ```rust
/// use rubik_state::core::Cube;
/// use rubik_state::turns::{parse_sequence, Move, Turn};
///
/// let moves = parse_sequence("R U R' F").unwrap();
/// assert_eq!(moves[2], Move::counter_clockwise(Turn::Right));
///
/// let undo: Vec<Move> = moves.iter().rev().map(|mv| mv.inverse()).collect();
///
/// let mut cube = Cube::new();
/// cube.apply_moves(&moves);
/// cube.apply_moves(&undo);
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub turn: Turn,
    /// `false` for clockwise, `true` for counter-clockwise.
    pub invert: bool,
}

impl Move {
    pub const fn new(turn: Turn, invert: bool) -> Self {
        Self { turn, invert }
    }

    pub const fn clockwise(turn: Turn) -> Self {
        Self::new(turn, false)
    }

    pub const fn counter_clockwise(turn: Turn) -> Self {
        Self::new(turn, true)
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.turn, !self.invert)
    }

    /// Apply this move to `cube` through its named turn operation.
    pub fn apply(self, cube: &mut Cube) -> &mut Cube {
        match self.turn {
            Turn::Left => cube.left(self.invert),
            Turn::Right => cube.right(self.invert),
            Turn::Top => cube.top(self.invert),
            Turn::Bottom => cube.bottom(self.invert),
            Turn::Front => cube.front(self.invert),
            Turn::Back => cube.back(self.invert),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.turn.notation())?;
        if self.invert {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parses a single token such as `F` or `R'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || CubeError::InvalidMove(token.to_string());
        let mut chars = token.chars();
        let turn = chars.next().and_then(Turn::from_notation).ok_or_else(invalid)?;
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Move::clockwise(turn)),
            (Some('\''), None) => Ok(Move::counter_clockwise(turn)),
            _ => Err(invalid()),
        }
    }
}

/// Parse a whitespace-separated move sequence such as `"R U R' U'"`.
pub fn parse_sequence(input: &str) -> Result<Vec<Move>, CubeError> {
    input.split_whitespace().map(str::parse).collect()
}
