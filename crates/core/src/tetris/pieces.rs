//! Pieces module - tetromino shape matrices and rotation
//!
//! A shape is a small boolean matrix (at most 4x4) with a logical extent of
//! `rows x cols`. Rotation is a clockwise transpose-and-reverse of that
//! matrix, so the extent swaps on every turn (a 1x4 `I` becomes 4x1).

use blockdrop_types::PieceKind;

/// Largest extent of any shape in either direction.
pub const SHAPE_MAX: usize = 4;

/// Offset of a single cell relative to the piece's top-left corner.
pub type CellOffset = (i8, i8);

/// Fixed-size boolean shape matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    rows: u8,
    cols: u8,
}

impl Shape {
    /// Build from a row-major picture. Rows past the first `SHAPE_MAX` and
    /// columns past the first `SHAPE_MAX` are ignored.
    pub const fn from_matrix<const R: usize, const C: usize>(m: [[u8; C]; R]) -> Self {
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        let mut r = 0;
        while r < R && r < SHAPE_MAX {
            let mut c = 0;
            while c < C && c < SHAPE_MAX {
                cells[r][c] = m[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        let rows = if R < SHAPE_MAX { R } else { SHAPE_MAX };
        let cols = if C < SHAPE_MAX { C } else { SHAPE_MAX };
        Self {
            cells,
            rows: rows as u8,
            cols: cols as u8,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Rotate 90° clockwise: row `i` of the result is column `i` of the
    /// original read bottom-to-top.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Occupied cells as `(d_row, d_col)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: Shape = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = Shape::from_matrix([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = Shape::from_matrix([[0, 0, 1], [1, 1, 1]]);

/// Spawn shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Column that centers `shape` horizontally on a board `board_cols` wide.
pub fn spawn_col(shape: &Shape, board_cols: usize) -> i8 {
    (board_cols.saturating_sub(shape.cols() as usize) / 2) as i8
}
