//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]. Independent of
//! any rendering; the binary decides which game's mapping to use.

pub mod map;

pub use blockdrop_types as types;

pub use map::{puyo_intent, should_quit, tetris_intent};
