//! Core game logic - pure, deterministic, and testable
//!
//! Both engines live here. Nothing in this crate reads a clock, touches the
//! terminal or does I/O: time comes in through `tick`, player input through
//! [`types::Intent`], and state goes out through snapshots.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size board storage shared by both engines
//! - [`rng`]: seeded LCG for piece and color choice
//! - [`tetris`]: falling-piece engine (shapes, kicks, line clears, levels)
//! - [`puyo`]: connected-cluster engine (pairs, gravity, flood fill, chains)
//! - [`snapshot`]: serializable read-only views
//! - [`session`]: the [`GameSession`] trait front ends drive
//!
//! # Example
//!
//! ```
//! use blockdrop_core::TetrisGame;
//! use blockdrop_types::{Intent, Phase};
//!
//! let mut game = TetrisGame::new(12345);
//! game.apply(Intent::Start);
//! game.apply(Intent::MoveRight);
//! game.apply(Intent::Rotate);
//! game.apply(Intent::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.pieces_locked(), 1);
//! ```
//!
//! # Timing
//!
//! - Falling-piece gravity is in milliseconds: 500ms per row at level 1,
//!   50ms faster per level, never below 100ms.
//! - Cluster-matching gravity is in frames: one row every 30 frames.

pub mod grid;
pub mod puyo;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tetris;

pub use blockdrop_types as types;

pub use grid::Grid;
pub use puyo::{PuyoBoard, PuyoGame, ResolveReport};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snapshot::{ActiveSnapshot, PairSnapshot, PuyoSnapshot, TetrisSnapshot};
pub use tetris::{ClearReport, TetrisBoard, TetrisGame, Tetromino};
