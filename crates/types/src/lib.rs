//! Shared types and constants for both block games.
//!
//! Everything here is plain data with no game logic, so it can be used from the
//! engines, the terminal renderer and the input mapping alike.
//!
//! # Board dimensions
//!
//! | Game | Rows | Columns |
//! |------|------|---------|
//! | Falling-piece (Tetris-style) | 20 | 10 |
//! | Cluster-matching (Puyo-style) | 12 | 6 |
//!
//! Coordinates are `(row, col)` with row 0 at the top. Rows above the board
//! (negative rows) are only ever used transiently by a falling piece.
//!
//! # Timing
//!
//! The falling-piece engine is driven by wall-clock milliseconds:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | ... | -50ms per level |
//! | 9+ | 100ms floor |
//!
//! The cluster-matching engine is driven by a frame counter and steps the
//! pair down every [`PUYO_DROP_FRAMES`] frames.
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{Intent, Orientation, PieceKind, TETRIS_COLS, TETRIS_ROWS};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Orientation::Up.rotate_cw(), Orientation::Right);
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//! assert_eq!((TETRIS_ROWS, TETRIS_COLS), (20, 10));
//! ```

use serde::Serialize;

/// Falling-piece board height in rows.
pub const TETRIS_ROWS: usize = 20;

/// Falling-piece board width in columns.
pub const TETRIS_COLS: usize = 10;

/// Cluster-matching board height in rows.
pub const PUYO_ROWS: usize = 12;

/// Cluster-matching board width in columns.
pub const PUYO_COLS: usize = 6;

/// Host frame interval in milliseconds (about 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1.
pub const BASE_DROP_MS: u32 = 500;

/// Gravity speeds up by this much per level.
pub const DROP_STEP_MS: u32 = 50;

/// Gravity never gets faster than this.
pub const DROP_INTERVAL_FLOOR_MS: u32 = 100;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing 1, 2, 3 or 4 lines in a single lock.
///
/// Multiplied by the current level (levels start at 1).
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Horizontal offsets tried, in order, when a rotation does not fit.
pub const KICK_OFFSETS: [i8; 6] = [1, -1, 2, -2, 3, -3];

/// Frames between two gravity steps of the falling pair.
pub const PUYO_DROP_FRAMES: u32 = 30;

/// Smallest same-color cluster that gets removed.
pub const PUYO_CLUSTER_MIN: usize = 4;

/// Points per removed cell.
pub const PUYO_POINTS_PER_CELL: u32 = 10;

/// Session lifecycle shared by both engines.
///
/// `Idle -> Running <-> Paused`, `Running -> GameOver`, and `reset` returns
/// any phase to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }

    /// Whether a new session may be started from this phase.
    pub fn can_start(&self) -> bool {
        matches!(self, Phase::Idle | Phase::GameOver)
    }
}

/// Discrete player intents, delivered between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Begin a new session (from idle or after game over)
    Start,
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Rotate 90° clockwise
    Rotate,
    /// Move one row down
    SoftDrop,
    /// Drop to rest and lock immediately
    HardDrop,
    /// Toggle pause
    Pause,
    /// Discard the session and return to idle
    Reset,
}

impl Intent {
    /// Parse an intent name (case-insensitive).
    ///
    /// ```
    /// use blockdrop_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Intent::Start),
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "rotate" => Some(Intent::Rotate),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "pause" => Some(Intent::Pause),
            "reset" => Some(Intent::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::Rotate => "rotate",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::Pause => "pause",
            Intent::Reset => "reset",
        }
    }
}

/// 24-bit display color attached to pieces and puyos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino kinds.
///
/// A locked cell remembers its kind, which doubles as its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockdrop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xF0, 0xF0),
            PieceKind::O => Rgb::new(0xF0, 0xF0, 0x00),
            PieceKind::T => Rgb::new(0xA0, 0x00, 0xF0),
            PieceKind::S => Rgb::new(0x00, 0xF0, 0x00),
            PieceKind::Z => Rgb::new(0xF0, 0x00, 0x00),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xF0),
            PieceKind::L => Rgb::new(0xF0, 0xA0, 0x00),
        }
    }
}

/// The six puyo colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PuyoColor {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl PuyoColor {
    pub const ALL: [PuyoColor; 6] = [
        PuyoColor::Red,
        PuyoColor::Blue,
        PuyoColor::Green,
        PuyoColor::Yellow,
        PuyoColor::Magenta,
        PuyoColor::Cyan,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(PuyoColor::Red),
            'B' => Some(PuyoColor::Blue),
            'G' => Some(PuyoColor::Green),
            'Y' => Some(PuyoColor::Yellow),
            'M' => Some(PuyoColor::Magenta),
            'C' => Some(PuyoColor::Cyan),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PuyoColor::Red => 'R',
            PuyoColor::Blue => 'B',
            PuyoColor::Green => 'G',
            PuyoColor::Yellow => 'Y',
            PuyoColor::Magenta => 'M',
            PuyoColor::Cyan => 'C',
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            PuyoColor::Red => Rgb::new(0xFF, 0x00, 0x00),
            PuyoColor::Blue => Rgb::new(0x00, 0x00, 0xFF),
            PuyoColor::Green => Rgb::new(0x00, 0xDD, 0x00),
            PuyoColor::Yellow => Rgb::new(0xFF, 0xDD, 0x00),
            PuyoColor::Magenta => Rgb::new(0xFF, 0x00, 0xFF),
            PuyoColor::Cyan => Rgb::new(0x00, 0xDD, 0xDD),
        }
    }
}

/// Where the second cell of a falling pair sits relative to its anchor.
///
/// The cycle goes: Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockdrop_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.rotate_cw(), Orientation::Right);
    /// assert_eq!(Orientation::Left.rotate_cw(), Orientation::Up);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// `(d_row, d_col)` of the satellite cell relative to the anchor.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Orientation::Up => (-1, 0),
            Orientation::Right => (0, 1),
            Orientation::Down => (1, 0),
            Orientation::Left => (0, -1),
        }
    }
}
