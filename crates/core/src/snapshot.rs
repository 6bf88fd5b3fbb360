//! Read-only views of a session for renderers and headless output.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::puyo::{Pair, PairCell, PuyoGame, ResolveReport};
use crate::tetris::{ClearReport, TetrisGame, Tetromino};
use crate::types::{
    Orientation, Phase, PieceKind, PuyoColor, PUYO_COLS, PUYO_ROWS, TETRIS_COLS, TETRIS_ROWS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
    /// Absolute `(row, col)` of each cell, rows above the board included.
    pub cells: ArrayVec<(i8, i8), 4>,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            row: value.row,
            col: value.col,
            cells: value.cells().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TetrisSnapshot {
    pub phase: Phase,
    pub board: [[Option<PieceKind>; TETRIS_COLS]; TETRIS_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub episode: u32,
    pub pieces_locked: u32,
    pub last_clear: Option<ClearReport>,
}

impl TetrisGame {
    pub fn snapshot(&self) -> TetrisSnapshot {
        TetrisSnapshot {
            phase: self.phase(),
            board: *self.board().as_rows(),
            active: self.active().map(ActiveSnapshot::from),
            ghost_row: self.ghost_row(),
            next: self.next(),
            score: self.score(),
            lines: self.lines(),
            level: self.level(),
            drop_interval_ms: self.drop_interval_ms(),
            episode: self.episode(),
            pieces_locked: self.pieces_locked(),
            last_clear: self.last_clear().cloned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairSnapshot {
    pub orientation: Orientation,
    /// Anchor first, satellite second.
    pub cells: [PairCell; 2],
}

impl From<Pair> for PairSnapshot {
    fn from(value: Pair) -> Self {
        Self {
            orientation: value.orientation,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuyoSnapshot {
    pub phase: Phase,
    pub board: [[Option<PuyoColor>; PUYO_COLS]; PUYO_ROWS],
    pub active: Option<PairSnapshot>,
    pub next: Option<[PuyoColor; 2]>,
    pub score: u32,
    pub frame_counter: u32,
    pub episode: u32,
    pub pairs_placed: u32,
    pub last_resolve: Option<ResolveReport>,
}

impl PuyoGame {
    pub fn snapshot(&self) -> PuyoSnapshot {
        PuyoSnapshot {
            phase: self.phase(),
            board: *self.board().as_rows(),
            active: self.active().map(PairSnapshot::from),
            next: self.next(),
            score: self.score(),
            frame_counter: self.frame_counter(),
            episode: self.episode(),
            pairs_placed: self.pairs_placed(),
            last_resolve: self.last_resolve().cloned(),
        }
    }
}
