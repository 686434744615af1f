//! Table-driven definitions of the six face turns.

use crate::core::{Color, FACE_SIZE};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Whether a turn moves rows or columns of its ring faces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Strip {
    Row,
    Column,
}

/// Geometry of one face turn.
///
/// A clockwise turn carries the strip at `index` from `ring[0]` to `ring[1]`,
/// from `ring[1]` to `ring[2]` and so on back to `ring[0]`, then rotates
/// `rotated` clockwise. Counter-clockwise walks the ring backwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TurnDefinition {
    pub ring: [Color; 4],
    pub rotated: Color,
    pub strip: Strip,
    pub index: usize,
}

/// Structural problems with a turn definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnDefinitionError {
    #[error("Strip index {index} is not a border index (0 or {})", FACE_SIZE - 1)]
    NotBorderIndex { index: usize },

    #[error("Face {face} appears more than once in the ring")]
    DuplicateRingFace { face: Color },

    #[error("Rotated face {face} is part of its own ring")]
    RotatedFaceInRing { face: Color },

    #[error("Face {face}, opposite the rotated face, is part of the ring")]
    OppositeFaceInRing { face: Color },
}

impl TurnDefinition {
    /// Check the definition, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TurnDefinitionError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TurnDefinitionError>>> = Vec::new();

        let border = self.index == 0 || self.index == FACE_SIZE - 1;
        checks.push(if border {
            Validation::success(())
        } else {
            Validation::fail(TurnDefinitionError::NotBorderIndex { index: self.index })
        });

        for (i, face) in self.ring.iter().enumerate() {
            if self.ring[..i].contains(face) {
                checks.push(Validation::fail(TurnDefinitionError::DuplicateRingFace {
                    face: *face,
                }));
            }
        }

        if self.ring.contains(&self.rotated) {
            checks.push(Validation::fail(TurnDefinitionError::RotatedFaceInRing {
                face: self.rotated,
            }));
        }

        let opposite = self.rotated.opposite();
        if self.ring.contains(&opposite) {
            checks.push(Validation::fail(TurnDefinitionError::OppositeFaceInRing {
                face: opposite,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Ring order for the given direction.
    pub fn ring_for(&self, invert: bool) -> [Color; 4] {
        let mut ring = self.ring;
        if invert {
            ring.reverse();
        }
        ring
    }
}

pub const LEFT: TurnDefinition = TurnDefinition {
    ring: [Color::Red, Color::Yellow, Color::Orange, Color::White],
    rotated: Color::Green,
    strip: Strip::Column,
    index: 0,
};

pub const RIGHT: TurnDefinition = TurnDefinition {
    ring: [Color::Red, Color::White, Color::Orange, Color::Yellow],
    rotated: Color::Blue,
    strip: Strip::Column,
    index: 2,
};

pub const TOP: TurnDefinition = TurnDefinition {
    ring: [Color::Red, Color::Green, Color::Orange, Color::Blue],
    rotated: Color::White,
    strip: Strip::Row,
    index: 0,
};

pub const BOTTOM: TurnDefinition = TurnDefinition {
    ring: [Color::Red, Color::Blue, Color::Orange, Color::Green],
    rotated: Color::Yellow,
    strip: Strip::Row,
    index: 2,
};

pub const FRONT: TurnDefinition = TurnDefinition {
    ring: [Color::White, Color::Blue, Color::Yellow, Color::Green],
    rotated: Color::Red,
    strip: Strip::Row,
    index: 0,
};

pub const BACK: TurnDefinition = TurnDefinition {
    ring: [Color::White, Color::Green, Color::Yellow, Color::Blue],
    rotated: Color::Orange,
    strip: Strip::Row,
    index: 2,
};
