//! Cube state model and turn engine.
//!
//! - `Color` names both facelet colors and faces
//! - `Face` is a 3x3 grid with row/column accessors and self-rotation
//! - `Cube` owns six faces and applies the six face turns

mod color;
mod cube;
mod error;
mod face;

pub use color::Color;
pub use cube::{Cube, FACELET_COUNT};
pub use error::CubeError;
pub use face::{rotate_grid, Face, Grid, FACE_SIZE};
