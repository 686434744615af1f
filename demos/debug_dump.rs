//! Debug Dump
//!
//! This example applies a move sequence to a cube, prints every face, then
//! walks the sequence back through a session's undo history.
//!
//! Key concepts:
//! - Parsing face notation into moves
//! - The human-readable face dump
//! - Recording moves in a session and undoing them one at a time
//!
//! Run with: cargo run --example debug_dump

use rubik_state::core::Cube;
use rubik_state::turns::{parse_sequence, CubeSession};

fn main() {
    println!("=== Debug Dump Example ===\n");

    let moves = parse_sequence("R U R' U'").unwrap();

    let mut cube = Cube::new();
    cube.apply_moves(&moves);
    println!("After R U R' U':\n");
    println!("{}", cube.dump());

    // Same sequence, recorded so it can be undone
    let mut session = CubeSession::new();
    session.apply_all(&moves);
    assert_eq!(session.cube(), &cube);
    println!("Recorded {} moves", session.history().len());

    while let Some(mv) = session.undo() {
        println!("Undid {mv}");
    }

    println!("Solved again: {}", session.is_solved());

    println!("\n=== Example Complete ===");
}
