//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer, and the framebuffer is diffed and flushed to the terminal.
//! No widgets or layout engine, and board cells are 2 characters wide by
//! default to keep them roughly square.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use board_view::{BoardView, Drawable, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
