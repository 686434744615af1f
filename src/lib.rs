//! rubik-state: a 3x3x3 Rubik's Cube state model
//!
//! The cube is six fixed 3x3 grids of colors. Each of the six face turns is
//! one row of a constant table: a ring of four neighbouring faces, the strip
//! (row or column) that travels around that ring, and the face whose own grid
//! rotates by 90 degrees. The ring rotation is implemented once and shared by
//! every turn.
//!
//! # Core Concepts
//!
//! - **Cube**: the state, mutated only through `left`, `right`, `top`,
//!   `bottom`, `front` and `back`
//! - **Turns**: the turn table, `Move` notation and undoable sessions
//! - **Builder**: validated construction from explicit face layouts
//!
//! # Example
//!
//! ```rust
//! use rubik_state::core::{Color, Cube};
//!
//! let mut cube = Cube::new();
//! cube.front(false);
//!
//! // The strip on White's top row moved on to Blue.
//! assert_eq!(cube.row(Color::Blue, 0).unwrap(), [Color::White; 3]);
//!
//! cube.front(true);
//! assert!(cube.is_solved());
//! ```

pub mod builder;
pub mod core;
pub mod turns;

// Re-export commonly used types
pub use crate::builder::{BuildError, CubeBuilder};
pub use crate::core::{Color, Cube, CubeError, Face};
pub use crate::turns::{CubeSession, Move, Turn};
