//! Cube errors.

use thiserror::Error;

/// Errors raised by cube accessors and parsers.
///
/// None of these can occur through the six face turns, which only use the
/// border indices of a constant table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CubeError {
    #[error("Index {index} out of range, expected 0..=2")]
    OutOfRange { index: usize },

    #[error("Unknown face identifier '{0}'")]
    InvalidFace(String),

    #[error("Expected 9 cells on a face, found {cells}")]
    MalformedFace { cells: usize },

    #[error("Unknown move '{0}'")]
    InvalidMove(String),
}
