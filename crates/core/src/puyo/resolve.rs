//! Resolution: gravity, cluster search and the chain loop.
//!
//! After a pair lands the board settles by repeating: compact every column,
//! find same-color clusters by flood fill, remove every cluster of at least
//! [`PUYO_CLUSTER_MIN`] cells and score them. The loop ends on the first pass
//! that removes nothing, so a resolved board is a fixed point.

use serde::Serialize;

use crate::grid::Grid;
use crate::types::{PuyoColor, PUYO_CLUSTER_MIN, PUYO_COLS, PUYO_POINTS_PER_CELL, PUYO_ROWS};

/// Cluster-matching board: 12 rows of 6 columns.
pub type PuyoBoard = Grid<PuyoColor, PUYO_ROWS, PUYO_COLS>;

/// A maximal set of 4-connected cells of one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub color: PuyoColor,
    /// `(row, col)` in discovery order.
    pub cells: Vec<(u8, u8)>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// What one resolution produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolveReport {
    /// Passes that removed something.
    pub chains: u32,
    pub removed: u32,
    pub points: u32,
    /// Cells removed by each pass.
    pub chain_sizes: Vec<u32>,
}

/// Compact every column downward, keeping the stacking order.
///
/// Returns whether any cell moved.
pub fn apply_gravity(board: &mut PuyoBoard) -> bool {
    let mut moved = false;
    for col in 0..PUYO_COLS as i8 {
        let mut write = PUYO_ROWS as i8 - 1;
        for row in (0..PUYO_ROWS as i8).rev() {
            let Some(Some(color)) = board.get(row, col) else {
                continue;
            };
            if write != row {
                board.set(write, col, Some(color));
                board.set(row, col, None);
                moved = true;
            }
            write -= 1;
        }
    }
    moved
}

/// Every same-color cluster on the board, found with an explicit stack.
pub fn find_clusters(board: &PuyoBoard) -> Vec<Cluster> {
    let mut visited = [[false; PUYO_COLS]; PUYO_ROWS];
    let mut stack: Vec<(u8, u8)> = Vec::new();
    let mut clusters = Vec::new();

    for (row, col, color) in board.iter_occupied() {
        if visited[row][col] {
            continue;
        }
        visited[row][col] = true;
        stack.push((row as u8, col as u8));
        let mut cells = Vec::new();

        while let Some((r, c)) = stack.pop() {
            cells.push((r, c));
            for (dr, dc) in [(-1i8, 0i8), (1, 0), (0, -1), (0, 1)] {
                let nr = r as i8 + dr;
                let nc = c as i8 + dc;
                if board.get(nr, nc) != Some(Some(color)) {
                    continue;
                }
                let seen = &mut visited[nr as usize][nc as usize];
                if !*seen {
                    *seen = true;
                    stack.push((nr as u8, nc as u8));
                }
            }
        }

        clusters.push(Cluster { color, cells });
    }

    clusters
}

/// Run gravity and removal until nothing more clears.
pub fn resolve(board: &mut PuyoBoard) -> ResolveReport {
    let mut report = ResolveReport::default();
    apply_gravity(board);

    loop {
        let doomed: Vec<(u8, u8)> = find_clusters(board)
            .into_iter()
            .filter(|cluster| cluster.len() >= PUYO_CLUSTER_MIN)
            .flat_map(|cluster| cluster.cells)
            .collect();
        if doomed.is_empty() {
            break;
        }

        for &(r, c) in &doomed {
            board.set(r as i8, c as i8, None);
        }
        let removed = doomed.len() as u32;
        report.chains += 1;
        report.removed += removed;
        report.points += removed * PUYO_POINTS_PER_CELL;
        report.chain_sizes.push(removed);

        apply_gravity(board);
    }

    report
}
