//! Builder API for constructing cubes from explicit face layouts.
//!
//! Layouts are validated up front and every violation is reported at once,
//! rather than stopping at the first one.

pub mod error;

pub use error::{BuildError, LayoutViolation};

use crate::core::{Color, Cube, CubeError, Face, Grid, FACE_SIZE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for cubes in an arbitrary configuration.
///
/// Faces that are not set stay solved.
///
/// # Example
///
/// ```rust
/// use rubik_state::builder::CubeBuilder;
/// use rubik_state::core::{Color, Cube};
///
/// let mut expected = Cube::new();
/// expected.top(false);
///
/// let cube = CubeBuilder::new()
///     .face_codes(Color::Red, "b b b / r r r / r r r")
///     .unwrap()
///     .face_codes(Color::Green, "r r r / g g g / g g g")
///     .unwrap()
///     .face_codes(Color::Orange, "g g g / o o o / o o o")
///     .unwrap()
///     .face_codes(Color::Blue, "o o o / b b b / b b b")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(cube, expected);
/// ```
#[derive(Clone, Debug)]
pub struct CubeBuilder {
    faces: [Face; 6],
}

impl CubeBuilder {
    /// Create a builder starting from a solved cube.
    pub fn new() -> Self {
        Self {
            faces: Color::ALL.map(Face::uniform),
        }
    }

    /// Set the cells of one face.
    pub fn face(mut self, face: Color, cells: Grid<Color>) -> Self {
        self.faces[face.index()] = Face::from_cells(cells);
        self
    }

    /// Set one face from color codes, e.g. `"r g b / y w o / r r r"`.
    pub fn face_codes(self, face: Color, codes: &str) -> Result<Self, CubeError> {
        let parsed: Face = codes.parse()?;
        Ok(self.face(face, *parsed.cells()))
    }

    /// Check the layout, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<LayoutViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LayoutViolation>>> = Vec::new();

        for color in Color::ALL {
            let found = self.faces[color.index()].center();
            checks.push(if found == color {
                Validation::success(())
            } else {
                Validation::fail(LayoutViolation::MisplacedCenter { face: color, found })
            });
        }

        for color in Color::ALL {
            let count: usize = self.faces.iter().map(|face| face.count(color)).sum();
            checks.push(if count == FACE_SIZE * FACE_SIZE {
                Validation::success(())
            } else {
                Validation::fail(LayoutViolation::WrongColorCount { color, count })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the cube.
    /// Returns every layout violation if the layout is invalid.
    pub fn build(self) -> Result<Cube, BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(Cube::from_faces(self.faces)),
            Validation::Failure(errors) => Err(BuildError::InvalidLayout(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for CubeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
