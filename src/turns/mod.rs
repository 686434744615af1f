//! Face turns and the moves built from them.
//!
//! - `definition`: the constant table describing each turn's ring and strip
//! - `moves`: the `Turn`/`Move` vocabulary and face notation
//! - `history` / `session`: recording applied moves so they can be undone

mod definition;
mod history;
mod moves;
mod session;

pub use definition::{
    Strip, TurnDefinition, TurnDefinitionError, BACK, BOTTOM, FRONT, LEFT, RIGHT, TOP,
};
pub use history::{TurnHistory, TurnRecord};
pub use moves::{parse_sequence, Move, Turn};
pub use session::CubeSession;
