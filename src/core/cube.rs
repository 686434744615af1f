//! The cube state and its face-turn engine.

use super::color::Color;
use super::error::CubeError;
use super::face::{check_index, Face, FACE_SIZE};
use crate::turns::{Move, Strip, Turn, TurnDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Total number of facelets on a cube.
pub const FACELET_COUNT: usize = 6 * FACE_SIZE * FACE_SIZE;

/// State of a 3x3x3 cube: six faces indexed by their home color.
///
/// The cube can only be changed through the six named turns, each of which
/// permutes facelets and never creates or destroys one.
///
/// # Example
///
/// ```rust
/// use rubik_state::core::{Color, Cube};
///
/// let mut cube = Cube::new();
/// cube.front(false).top(false).top(true).front(true);
/// assert!(cube.is_solved());
///
/// cube.front(false);
/// assert_eq!(cube.row(Color::Blue, 0).unwrap(), [Color::White; 3]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cube {
    faces: [Face; 6],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube: every face shows its home color.
    pub fn new() -> Self {
        Self {
            faces: Color::ALL.map(Face::uniform),
        }
    }

    pub(crate) fn from_faces(faces: [Face; 6]) -> Self {
        Self { faces }
    }

    /// All six faces in `Color::ALL` order.
    pub fn state(&self) -> &[Face; 6] {
        &self.faces
    }

    pub fn face(&self, face: Color) -> &Face {
        &self.faces[face.index()]
    }

    /// Faces paired with their identity, in `Color::ALL` order.
    pub fn faces(&self) -> impl Iterator<Item = (Color, &Face)> {
        Color::ALL.into_iter().zip(self.faces.iter())
    }

    /// True when every face shows only its home color.
    pub fn is_solved(&self) -> bool {
        self.faces().all(|(color, face)| face.is_uniform(color))
    }

    /// How many facelets of each color the cube holds, in `Color::ALL` order.
    pub fn color_counts(&self) -> [usize; 6] {
        Color::ALL.map(|color| self.faces.iter().map(|face| face.count(color)).sum())
    }

    /// Column `index` of `face`, top to bottom.
    pub fn column(&self, face: Color, index: usize) -> Result<[Color; FACE_SIZE], CubeError> {
        self.face(face).column(index)
    }

    /// Row `index` of `face`, left to right.
    pub fn row(&self, face: Color, index: usize) -> Result<[Color; FACE_SIZE], CubeError> {
        self.face(face).row(index)
    }

    pub(crate) fn set_column(
        &mut self,
        face: Color,
        index: usize,
        values: [Color; FACE_SIZE],
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        self.faces[face.index()].set_column(index, values)
    }

    pub(crate) fn set_row(
        &mut self,
        face: Color,
        index: usize,
        values: [Color; FACE_SIZE],
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        self.faces[face.index()].set_row(index, values)
    }

    pub(crate) fn rotate_face_self(&mut self, face: Color, clockwise: bool) {
        self.faces[face.index()].rotate(clockwise);
    }

    fn read_strip(
        &self,
        face: Color,
        strip: Strip,
        index: usize,
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        match strip {
            Strip::Row => self.row(face, index),
            Strip::Column => self.column(face, index),
        }
    }

    fn write_strip(
        &mut self,
        face: Color,
        strip: Strip,
        index: usize,
        values: [Color; FACE_SIZE],
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        match strip {
            Strip::Row => self.set_row(face, index, values),
            Strip::Column => self.set_column(face, index, values),
        }
    }

    /// Apply one turn: cycle the border strip around the ring, then rotate
    /// the turned face's own grid.
    ///
    /// The index is checked before anything is written, so a failed turn
    /// leaves the cube untouched.
    pub(crate) fn do_turn(
        &mut self,
        definition: &TurnDefinition,
        invert: bool,
    ) -> Result<&mut Self, CubeError> {
        let index = check_index(definition.index)?;
        let ring = definition.ring_for(invert);

        // Each write hands back the strip it displaced, which is carried on
        // to the next face.
        let mut carried = self.read_strip(ring[0], definition.strip, index)?;
        for &face in &ring[1..] {
            carried = self.write_strip(face, definition.strip, index, carried)?;
        }
        self.write_strip(ring[0], definition.strip, index, carried)?;

        self.rotate_face_self(definition.rotated, !invert);

        trace!(face = %definition.rotated, invert, "turned face");
        Ok(self)
    }

    fn turn(&mut self, turn: Turn, invert: bool) -> &mut Self {
        self.do_turn(turn.definition(), invert)
            .expect("turn table only uses border indices")
    }

    /// Turn the left (green) face. `invert` turns counter-clockwise.
    pub fn left(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Left, invert)
    }

    /// Turn the right (blue) face. `invert` turns counter-clockwise.
    pub fn right(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Right, invert)
    }

    /// Turn the top (white) face. `invert` turns counter-clockwise.
    pub fn top(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Top, invert)
    }

    /// Turn the bottom (yellow) face. `invert` turns counter-clockwise.
    pub fn bottom(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Bottom, invert)
    }

    /// Turn the front (red) face. `invert` turns counter-clockwise.
    pub fn front(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Front, invert)
    }

    /// Turn the back (orange) face. `invert` turns counter-clockwise.
    pub fn back(&mut self, invert: bool) -> &mut Self {
        self.turn(Turn::Back, invert)
    }

    /// Apply a sequence of moves in order.
    pub fn apply_moves(&mut self, moves: &[Move]) -> &mut Self {
        for mv in moves {
            mv.apply(self);
        }
        self
    }

    /// Human-readable dump of all six faces, for debugging only.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, face) in self.faces() {
            writeln!(f, "{color}")?;
            write!(f, "{face}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn face(s: &str) -> Face {
        s.parse().unwrap()
    }

    fn assert_faces(cube: &Cube, expected: [(Color, &str); 6]) {
        for (color, grid) in expected {
            assert_eq!(cube.face(color), &face(grid), "{color} face differs");
        }
    }

    fn apply(cube: &mut Cube, turn: Turn, invert: bool) {
        Move::new(turn, invert).apply(cube);
    }

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        for (color, face) in cube.faces() {
            assert!(face.is_uniform(color));
        }
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn front_turn_from_solved() {
        let mut cube = Cube::new();
        cube.front(false);

        assert_faces(
            &cube,
            [
                (Red, "r r r / r r r / r r r"),
                (Green, "y y y / g g g / g g g"),
                (Blue, "w w w / b b b / b b b"),
                (Yellow, "b b b / y y y / y y y"),
                (White, "g g g / w w w / w w w"),
                (Orange, "o o o / o o o / o o o"),
            ],
        );
    }

    #[test]
    fn top_turn_cycles_ring_rows() {
        let mut cube = Cube::new();
        cube.top(false);

        assert_faces(
            &cube,
            [
                (Red, "b b b / r r r / r r r"),
                (Green, "r r r / g g g / g g g"),
                (Blue, "o o o / b b b / b b b"),
                (Yellow, "y y y / y y y / y y y"),
                (White, "w w w / w w w / w w w"),
                (Orange, "g g g / o o o / o o o"),
            ],
        );
    }

    #[test]
    fn left_turn_cycles_ring_columns() {
        let mut cube = Cube::new();
        cube.left(false);

        assert_faces(
            &cube,
            [
                (Red, "w r r / w r r / w r r"),
                (Green, "g g g / g g g / g g g"),
                (Blue, "b b b / b b b / b b b"),
                (Yellow, "r y y / r y y / r y y"),
                (White, "o w w / o w w / o w w"),
                (Orange, "y o o / y o o / y o o"),
            ],
        );
    }

    #[test]
    fn right_turn_cycles_ring_columns() {
        let mut cube = Cube::new();
        cube.right(false);

        assert_faces(
            &cube,
            [
                (Red, "r r y / r r y / r r y"),
                (Green, "g g g / g g g / g g g"),
                (Blue, "b b b / b b b / b b b"),
                (Yellow, "y y o / y y o / y y o"),
                (White, "w w r / w w r / w w r"),
                (Orange, "o o w / o o w / o o w"),
            ],
        );
    }

    #[test]
    fn bottom_turn_cycles_ring_rows() {
        let mut cube = Cube::new();
        cube.bottom(false);

        assert_faces(
            &cube,
            [
                (Red, "r r r / r r r / g g g"),
                (Green, "g g g / g g g / o o o"),
                (Blue, "b b b / b b b / r r r"),
                (Yellow, "y y y / y y y / y y y"),
                (White, "w w w / w w w / w w w"),
                (Orange, "o o o / o o o / b b b"),
            ],
        );
    }

    #[test]
    fn back_turn_cycles_ring_rows() {
        let mut cube = Cube::new();
        cube.back(false);

        assert_faces(
            &cube,
            [
                (Red, "r r r / r r r / r r r"),
                (Green, "g g g / g g g / w w w"),
                (Blue, "b b b / b b b / y y y"),
                (Yellow, "y y y / y y y / g g g"),
                (White, "w w w / w w w / b b b"),
                (Orange, "o o o / o o o / o o o"),
            ],
        );
    }

    #[test]
    fn counter_clockwise_walks_ring_backwards() {
        let mut cube = Cube::new();
        cube.right(true);

        // Clockwise carries Red -> White -> Orange -> Yellow; inverted carries
        // Red -> Yellow -> Orange -> White.
        assert_eq!(cube.column(Yellow, 2).unwrap(), [Red; 3]);
        assert_eq!(cube.column(Orange, 2).unwrap(), [Yellow; 3]);
        assert_eq!(cube.column(White, 2).unwrap(), [Orange; 3]);
        assert_eq!(cube.column(Red, 2).unwrap(), [White; 3]);
    }

    #[test]
    fn turned_face_rotates_its_own_grid() {
        let mut cube = Cube::new();
        cube.top(false).front(false);

        // After top, Red's top row is blue; the front turn then rotates Red
        // clockwise, moving that row to the right column.
        assert_faces(
            &cube,
            [
                (Red, "r r b / r r b / r r b"),
                (Green, "y y y / g g g / g g g"),
                (Blue, "w w w / b b b / b b b"),
                (Yellow, "o o o / y y y / y y y"),
                (White, "r r r / w w w / w w w"),
                (Orange, "g g g / o o o / o o o"),
            ],
        );

        cube.front(true);
        assert_eq!(cube.face(Red), &face("b b b / r r r / r r r"));

        cube.front(true);
        assert_eq!(cube.face(Red), &face("b r r / b r r / b r r"));
    }

    #[test]
    fn every_turn_has_period_four() {
        let mut start = Cube::new();
        start.top(false).left(false).front(true);

        for turn in Turn::ALL {
            let mut cube = start.clone();
            for _ in 0..4 {
                apply(&mut cube, turn, false);
            }
            assert_eq!(cube, start, "{turn:?} is not period four");
        }
    }

    #[test]
    fn inverse_restores_state() {
        let mut start = Cube::new();
        start.back(false).right(false).bottom(true);

        for turn in Turn::ALL {
            for invert in [false, true] {
                let mut cube = start.clone();
                apply(&mut cube, turn, invert);
                assert_ne!(cube, start);
                apply(&mut cube, turn, !invert);
                assert_eq!(cube, start, "{turn:?} not undone");
            }
        }
    }

    #[test]
    fn turns_never_touch_opposite_face() {
        let mut start = Cube::new();
        start.top(false).right(false).front(false).left(true);

        for turn in Turn::ALL {
            let opposite = turn.face().opposite();
            for invert in [false, true] {
                let mut cube = start.clone();
                apply(&mut cube, turn, invert);
                assert_eq!(
                    cube.face(opposite),
                    start.face(opposite),
                    "{turn:?} touched {opposite}"
                );
            }
        }
    }

    #[test]
    fn top_and_right_do_not_commute() {
        let mut top_first = Cube::new();
        top_first.top(false).right(false);

        let mut right_first = Cube::new();
        right_first.right(false).top(false);

        assert_ne!(top_first, right_first);
        assert_eq!(top_first.row(Green, 0).unwrap(), [Red, Red, Red]);
        assert_eq!(right_first.row(Green, 0).unwrap(), [Red, Red, Yellow]);
    }

    #[test]
    fn facelets_are_conserved() {
        let mut cube = Cube::new();
        cube.front(false)
            .left(true)
            .top(false)
            .back(false)
            .bottom(true)
            .right(false);

        let counts = cube.color_counts();
        assert_eq!(counts, [9; 6]);
        assert_eq!(counts.iter().sum::<usize>(), FACELET_COUNT);
        assert!(!cube.is_solved());
    }

    #[test]
    fn centers_never_move() {
        let mut cube = Cube::new();
        cube.front(false).left(false).top(true).back(false).right(true);
        for (color, face) in cube.faces() {
            assert_eq!(face.center(), color);
        }
    }

    #[test]
    fn do_turn_rejects_out_of_range_index_without_mutation() {
        let mut cube = Cube::new();
        cube.top(false);
        let before = cube.clone();

        let definition = TurnDefinition {
            ring: [White, Blue, Yellow, Green],
            rotated: Red,
            strip: Strip::Row,
            index: 3,
        };

        let result = cube.do_turn(&definition, false).map(|_| ());
        assert_eq!(result, Err(CubeError::OutOfRange { index: 3 }));
        assert_eq!(cube, before);
    }

    #[test]
    fn accessors_reject_out_of_range_index() {
        let mut cube = Cube::new();
        assert_eq!(
            cube.column(Red, 3),
            Err(CubeError::OutOfRange { index: 3 })
        );
        assert_eq!(cube.row(Red, 9), Err(CubeError::OutOfRange { index: 9 }));
        assert!(cube.set_row(Red, 3, [Blue; 3]).is_err());
        assert!(cube.set_column(Red, 4, [Blue; 3]).is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn setters_return_previous_strip() {
        let mut cube = Cube::new();
        let previous = cube.set_row(White, 2, [Red; 3]).unwrap();
        assert_eq!(previous, [White; 3]);
        let previous = cube.set_column(White, 0, [Blue; 3]).unwrap();
        assert_eq!(previous, [White, White, Red]);
    }

    #[test]
    fn apply_moves_runs_in_order() {
        let mut sequenced = Cube::new();
        sequenced.apply_moves(&[Move::clockwise(Turn::Top), Move::clockwise(Turn::Front)]);

        let mut chained = Cube::new();
        chained.top(false).front(false);

        assert_eq!(sequenced, chained);
    }

    #[test]
    fn dump_lists_every_face() {
        let mut cube = Cube::new();
        cube.front(false);
        let dump = cube.dump();

        assert!(dump.starts_with("Red\nr r r\nr r r\nr r r\n\nGreen\ny y y\n"));
        assert!(dump.contains("White\ng g g\nw w w\nw w w\n"));
        assert_eq!(dump.lines().count(), 6 * 5);
    }

    #[test]
    fn cube_serializes_correctly() {
        let mut cube = Cube::new();
        cube.left(false).bottom(true);
        let json = serde_json::to_string(&cube).unwrap();
        let deserialized: Cube = serde_json::from_str(&json).unwrap();
        assert_eq!(cube, deserialized);
    }
}
