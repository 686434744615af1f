//! A cube paired with the history of moves applied to it.

use super::history::{TurnHistory, TurnRecord};
use super::moves::Move;
use crate::core::Cube;
use tracing::debug;

/// Owns a cube and records every move applied through it, so moves can be
/// undone one at a time.
///
/// # Example
///
/// ```rust
/// use rubik_state::turns::{parse_sequence, CubeSession};
///
/// let mut session = CubeSession::new();
/// session.apply_all(&parse_sequence("F U' L").unwrap());
/// assert_eq!(session.history().len(), 3);
///
/// while session.undo().is_some() {}
/// assert!(session.is_solved());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CubeSession {
    cube: Cube,
    history: TurnHistory,
}

impl CubeSession {
    /// Start from a solved cube.
    pub fn new() -> Self {
        Self::from_cube(Cube::new())
    }

    /// Start from an existing cube with an empty history.
    pub fn from_cube(cube: Cube) -> Self {
        Self {
            cube,
            history: TurnHistory::new(),
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Apply a move and record it.
    pub fn apply(&mut self, mv: Move) -> &mut Self {
        mv.apply(&mut self.cube);
        self.history.push(TurnRecord::now(mv));
        debug!(%mv, recorded = self.history.len(), "applied move");
        self
    }

    pub fn apply_all(&mut self, moves: &[Move]) -> &mut Self {
        for &mv in moves {
            self.apply(mv);
        }
        self
    }

    /// Undo the most recent move, returning it. The undo itself is not
    /// recorded.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        last.mv.inverse().apply(&mut self.cube);
        debug!(mv = %last.mv, remaining = self.history.len(), "undid move");
        Some(last.mv)
    }

    /// Consume the session, returning the cube.
    pub fn into_cube(self) -> Cube {
        self.cube
    }
}
