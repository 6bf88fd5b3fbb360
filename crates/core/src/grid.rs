//! Grid module - fixed-size board storage shared by both engines
//!
//! A grid is `ROWS x COLS` cells, each either empty or holding an occupant
//! (a piece kind or a puyo color). Coordinates are signed `(row, col)` so
//! callers can probe cells above the board without casting; those probes are
//! simply out of bounds, since rows above row 0 are never stored.

/// Fixed-size row-major grid of optional occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C: Copy, const ROWS: usize, const COLS: usize> {
    cells: [[Option<C>; COLS]; ROWS],
}

impl<C: Copy, const ROWS: usize, const COLS: usize> Grid<C, ROWS, COLS> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row as usize >= ROWS || col as usize >= COLS {
            return None;
        }
        Some((row as usize, col as usize))
    }

    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Option<C>> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Option<C>) -> bool {
        match Self::index(row, col) {
            Some((r, c)) => {
                self.cells[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and unoccupied.
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < ROWS && self.cells[row].iter().all(Option::is_some)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row >= ROWS || self.cells[row].iter().all(Option::is_none)
    }

    /// Remove `row`, shift every row above it down by one and insert an empty
    /// row at the top.
    pub fn remove_row(&mut self, row: usize) {
        if row >= ROWS {
            return;
        }
        self.cells.copy_within(0..row, 1);
        self.cells[0] = [None; COLS];
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    pub fn is_clear(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    /// Occupied cells as `(row, col, occupant)`, top-left first.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|occ| (r, c, occ)))
        })
    }

    /// The whole grid as nested arrays, top row first.
    pub fn as_rows(&self) -> &[[Option<C>; COLS]; ROWS] {
        &self.cells
    }

    /// Build a grid from an ASCII picture, one string per row, top row first.
    ///
    /// Pictures shorter than the grid are aligned to the bottom, which is where
    /// test scenarios usually live. `parse` maps a character to an occupant;
    /// `None` means empty.
    pub fn from_rows(picture: &[&str], parse: impl Fn(char) -> Option<C>) -> Self {
        let mut grid = Self::new();
        let offset = ROWS.saturating_sub(picture.len());
        for (i, line) in picture.iter().take(ROWS).enumerate() {
            for (c, ch) in line.chars().take(COLS).enumerate() {
                grid.cells[offset + i][c] = parse(ch);
            }
        }
        grid
    }
}

impl<C: Copy, const ROWS: usize, const COLS: usize> Default for Grid<C, ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
