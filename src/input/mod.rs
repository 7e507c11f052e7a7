//! Input module - decodes terminal key events into engine commands.
//!
//! The engine never sees raw keys; everything it receives is already a
//! `Command`, and unmapped keys are dropped here.

pub mod map;

pub use map::{is_start_key, map_key, should_quit};
