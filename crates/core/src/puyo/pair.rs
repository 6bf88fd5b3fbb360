//! The falling pair: an anchor cell and a satellite cell around it.

use serde::Serialize;

use crate::types::{Orientation, PuyoColor, PUYO_COLS};

/// Anchor column of a fresh pair.
pub const SPAWN_COL: i8 = (PUYO_COLS / 2) as i8 - 1;

/// Anchor row of a fresh pair; the satellite starts one row above it.
pub const SPAWN_ROW: i8 = 1;

/// One cell of a pair in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PairCell {
    pub row: i8,
    pub col: i8,
    pub color: PuyoColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pair {
    pub row: i8,
    pub col: i8,
    pub orientation: Orientation,
    /// Anchor color, then satellite color.
    pub colors: [PuyoColor; 2],
}

impl Pair {
    pub fn spawn(colors: [PuyoColor; 2]) -> Self {
        Self {
            row: SPAWN_ROW,
            col: SPAWN_COL,
            orientation: Orientation::Up,
            colors,
        }
    }

    /// Anchor first, satellite second.
    pub fn cells(&self) -> [PairCell; 2] {
        let (dr, dc) = self.orientation.offset();
        [
            PairCell {
                row: self.row,
                col: self.col,
                color: self.colors[0],
            },
            PairCell {
                row: self.row + dr,
                col: self.col + dc,
                color: self.colors[1],
            },
        ]
    }

    pub fn translated(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotate_cw(),
            ..*self
        }
    }
}
