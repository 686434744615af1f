//! Build errors for cube construction.

use crate::core::Color;
use thiserror::Error;

/// A single problem with an explicitly supplied cube layout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error("Face {face} has center {found}; centers never move")]
    MisplacedCenter { face: Color, found: Color },

    #[error("Color {color} appears {count} times, expected 9")]
    WrongColorCount { color: Color, count: usize },
}

/// Errors that can occur when building a cube.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid cube layout ({} violations)", .0.len())]
    InvalidLayout(Vec<LayoutViolation>),
}
