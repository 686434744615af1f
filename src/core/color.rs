//! Facelet colors.
//!
//! A cube has six colors and six faces. Each face is named after the color it
//! shows when the cube is solved, so `Color` doubles as the face identifier.

use super::error::CubeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six facelet colors, also used to identify a face.
///
/// The discriminant is the face's slot in the cube's face array.
///
/// # Example
///
/// ```rust
/// use rubik_state::core::Color;
///
/// assert_eq!(Color::Red.code(), 'r');
/// assert_eq!(Color::try_from('o').unwrap(), Color::Orange);
/// assert_eq!(Color::Green.opposite(), Color::Blue);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    White = 4,
    Orange = 5,
}

impl Color {
    /// All colors in face-array order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Orange,
    ];

    /// Slot of this face in the cube's face array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character code used by the debug dump.
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::White => 'w',
            Self::Orange => 'o',
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::White => "White",
            Self::Orange => "Orange",
        }
    }

    /// The face on the other side of the cube.
    ///
    /// A face and its opposite never appear together in a turn: each turn
    /// rotates one face and cycles the four faces around it, leaving the
    /// opposite face untouched.
    pub const fn opposite(self) -> Color {
        match self {
            Self::Red => Self::Orange,
            Self::Orange => Self::Red,
            Self::Green => Self::Blue,
            Self::Blue => Self::Green,
            Self::Yellow => Self::White,
            Self::White => Self::Yellow,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for Color {
    type Error = CubeError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_lowercase() {
            'r' => Ok(Self::Red),
            'g' => Ok(Self::Green),
            'b' => Ok(Self::Blue),
            'y' => Ok(Self::Yellow),
            'w' => Ok(Self::White),
            'o' => Ok(Self::Orange),
            _ => Err(CubeError::InvalidFace(code.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = CubeError;

    /// Accepts either the single-character code or the full name,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Color::try_from(code);
        }

        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CubeError::InvalidFace(s.to_string()))
    }
}
