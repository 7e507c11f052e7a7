//! Blockfall: a terminal falling-block puzzle game.
//!
//! `core` holds the deterministic engine, `input` maps keys to engine
//! commands, and `term` renders snapshots to the terminal. The binary in
//! `main.rs` wires them into a single-threaded poll/tick/render loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
