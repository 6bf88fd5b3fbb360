//! Falling-piece engine (Tetris-style)
//!
//! - [`pieces`]: the seven shape matrices and clockwise rotation
//! - [`scoring`]: line-clear points, levels and gravity speed
//! - [`game_state`]: the session itself (movement, kicks, locking, clears, ticks)

pub mod game_state;
pub mod pieces;
pub mod scoring;

pub use game_state::{clear_full_rows, ClearReport, TetrisBoard, TetrisGame, Tetromino};
pub use pieces::{spawn_col, spawn_shape, Shape};
