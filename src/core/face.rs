//! A single 3x3 face and its self-rotation.

use super::color::Color;
use super::error::CubeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows (and columns) on a face.
pub const FACE_SIZE: usize = 3;

/// A 3x3 grid of cells, addressed as `grid[row][column]`.
pub type Grid<T> = [[T; FACE_SIZE]; FACE_SIZE];

/// Check that a row or column index addresses a cell on a face.
pub(crate) fn check_index(index: usize) -> Result<usize, CubeError> {
    if index < FACE_SIZE {
        Ok(index)
    } else {
        Err(CubeError::OutOfRange { index })
    }
}

/// Rotate a grid by 90 degrees.
///
/// Clockwise moves cell `(r, c)` to `(c, 2 - r)`; counter-clockwise moves
/// `(r, c)` to `(2 - c, r)`. Generic over the cell type so the mapping can be
/// exercised with distinguishable labels.
///
/// # Example
///
/// ```rust
/// use rubik_state::core::rotate_grid;
///
/// let grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
/// assert_eq!(rotate_grid(&grid, true), [[7, 4, 1], [8, 5, 2], [9, 6, 3]]);
/// assert_eq!(rotate_grid(&grid, false), [[3, 6, 9], [2, 5, 8], [1, 4, 7]]);
/// ```
pub fn rotate_grid<T: Copy>(grid: &Grid<T>, clockwise: bool) -> Grid<T> {
    let last = FACE_SIZE - 1;
    let mut rotated = *grid;
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if clockwise {
                rotated[c][last - r] = cell;
            } else {
                rotated[last - c][r] = cell;
            }
        }
    }
    rotated
}

/// One face of the cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Face {
    cells: Grid<Color>,
}

impl Face {
    /// A face showing a single color on every cell.
    pub const fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; FACE_SIZE]; FACE_SIZE],
        }
    }

    /// Wrap an explicit grid of cells.
    pub const fn from_cells(cells: Grid<Color>) -> Self {
        Self { cells }
    }

    /// The full grid, rows top-to-bottom.
    pub fn cells(&self) -> &Grid<Color> {
        &self.cells
    }

    /// Cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Result<Color, CubeError> {
        Ok(self.cells[check_index(row)?][check_index(column)?])
    }

    /// The center cell, which no turn ever moves.
    pub fn center(&self) -> Color {
        self.cells[1][1]
    }

    /// Row `index`, left to right.
    pub fn row(&self, index: usize) -> Result<[Color; FACE_SIZE], CubeError> {
        Ok(self.cells[check_index(index)?])
    }

    /// Column `index`, top to bottom.
    pub fn column(&self, index: usize) -> Result<[Color; FACE_SIZE], CubeError> {
        let index = check_index(index)?;
        Ok(self.cells.map(|row| row[index]))
    }

    /// Overwrite row `index`, returning the row it replaced.
    pub(crate) fn set_row(
        &mut self,
        index: usize,
        values: [Color; FACE_SIZE],
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        let index = check_index(index)?;
        Ok(std::mem::replace(&mut self.cells[index], values))
    }

    /// Overwrite column `index`, returning the column it replaced.
    pub(crate) fn set_column(
        &mut self,
        index: usize,
        values: [Color; FACE_SIZE],
    ) -> Result<[Color; FACE_SIZE], CubeError> {
        let previous = self.column(index)?;
        for (row, value) in self.cells.iter_mut().zip(values) {
            row[index] = value;
        }
        Ok(previous)
    }

    /// Rotate this face's own grid by 90 degrees.
    pub(crate) fn rotate(&mut self, clockwise: bool) {
        self.cells = rotate_grid(&self.cells, clockwise);
    }

    /// True when every cell shows `color`.
    pub fn is_uniform(&self, color: Color) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == color)
    }

    /// Number of cells showing `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == color).count()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let codes: Vec<String> = row.iter().map(|cell| cell.code().to_string()).collect();
            writeln!(f, "{}", codes.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    /// Parses nine color codes in row-major order. Whitespace and `/` row
    /// separators are ignored, so `"r r r / g g g / b b b"` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Color::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if colors.len() != FACE_SIZE * FACE_SIZE {
            return Err(CubeError::MalformedFace {
                cells: colors.len(),
            });
        }

        let mut cells = [[Color::Red; FACE_SIZE]; FACE_SIZE];
        for (i, color) in colors.into_iter().enumerate() {
            cells[i / FACE_SIZE][i % FACE_SIZE] = color;
        }
        Ok(Self { cells })
    }
}
