//! Game state module - the falling-piece session
//!
//! Ties together the board, the active and queued pieces, the RNG and the
//! scoring rules. All timing comes in through [`TetrisGame::tick`], so the
//! session never reads a clock and can be driven step by step in tests.

use arrayvec::ArrayVec;
use log::{debug, info};
use serde::Serialize;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::tetris::pieces::{spawn_col, spawn_shape, Shape};
use crate::tetris::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::types::{Intent, Phase, PieceKind, KICK_OFFSETS, TETRIS_COLS, TETRIS_ROWS};

/// Falling-piece board: 20 rows of 10 columns, each cell remembering the kind
/// that filled it.
pub type TetrisBoard = Grid<PieceKind, TETRIS_ROWS, TETRIS_COLS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board row of the shape's top edge (may be negative while entering).
    pub row: i8,
    /// Board column of the shape's left edge.
    pub col: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position (top row, centered)
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            row: 0,
            col: spawn_col(&shape, TETRIS_COLS),
        }
    }

    /// Absolute `(row, col)` of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }

    pub fn translated(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Every occupied cell is inside the columns, above the floor, and either
    /// above the board or on an empty cell.
    pub fn fits(&self, board: &TetrisBoard) -> bool {
        self.cells().all(|(r, c)| cell_admits(board, r, c))
    }
}

/// Whether a falling cell may occupy `(row, col)`.
///
/// Rows above the top are allowed; the piece is still entering the board.
fn cell_admits(board: &TetrisBoard, row: i8, col: i8) -> bool {
    if col < 0 || col as usize >= TETRIS_COLS || row >= TETRIS_ROWS as i8 {
        return false;
    }
    row < 0 || board.is_empty_at(row, col)
}

/// Remove every full row, scanning bottom to top.
///
/// After a removal the rows above have shifted into the same index, so that
/// index is checked again before moving up. Returns the index of each removal
/// in order (an index repeats when adjacent rows clear).
pub fn clear_full_rows(board: &mut TetrisBoard) -> ArrayVec<u8, TETRIS_ROWS> {
    let mut cleared = ArrayVec::new();
    let mut row = TETRIS_ROWS;
    while row > 0 {
        let r = row - 1;
        if board.is_row_full(r) {
            board.remove_row(r);
            cleared.push(r as u8);
            continue;
        }
        row -= 1;
    }
    cleared
}

/// Outcome of one lock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClearReport {
    pub lines: u32,
    pub points: u32,
    /// Row index of each removal, in scan order.
    pub rows: ArrayVec<u8, TETRIS_ROWS>,
}

/// Complete falling-piece session
#[derive(Debug, Clone)]
pub struct TetrisGame {
    phase: Phase,
    board: TetrisBoard,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    rng: SimpleRng,
    /// Restart counter, carried across resets.
    episode: u32,
    pieces_locked: u32,
    score: u32,
    lines: u32,
    level: u32,
    drop_timer_ms: u32,
    last_clear: Option<ClearReport>,
}

impl TetrisGame {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: Phase::Idle,
            board: TetrisBoard::new(),
            active: None,
            next: None,
            rng: SimpleRng::new(seed),
            episode: 0,
            pieces_locked: 0,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer_ms: 0,
            last_clear: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &TetrisBoard {
        &self.board
    }

    /// Direct board access for scenario setup and tooling.
    pub fn board_mut(&mut self) -> &mut TetrisBoard {
        &mut self.board
    }

    /// Replace the active piece (scenario setup).
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    pub fn last_clear(&self) -> Option<&ClearReport> {
        self.last_clear.as_ref()
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Begin a fresh session. Only valid from `Idle` or `GameOver`.
    pub fn start(&mut self) -> bool {
        if !self.phase.can_start() {
            return false;
        }
        self.board.clear();
        self.active = None;
        self.next = None;
        self.pieces_locked = 0;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_timer_ms = 0;
        self.last_clear = None;
        self.phase = Phase::Running;
        info!("tetris: session {} started", self.episode);
        self.spawn_piece();
        true
    }

    /// Discard the session and return to `Idle`.
    ///
    /// The RNG continues from its current state so the next session deals a
    /// different sequence.
    pub fn reset(&mut self) {
        let episode = self.episode.wrapping_add(1);
        *self = Self::new(self.rng.state());
        self.episode = episode;
    }

    /// Running ⇄ Paused. Returns false from any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return false,
        };
        true
    }

    /// Promote the queued piece to active and queue a new one.
    ///
    /// Ends the session when the promoted piece does not fit at its spawn
    /// position.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.rng.piece_kind(),
        };
        self.next = Some(self.rng.piece_kind());

        let piece = Tetromino::spawn(kind);
        self.active = Some(piece);

        if !piece.fits(&self.board) {
            self.phase = Phase::GameOver;
            info!(
                "tetris: game over, spawn of {:?} blocked (score {}, lines {})",
                kind, self.score, self.lines
            );
            return false;
        }
        true
    }

    /// Translate the active piece. On failure nothing changes.
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.translated(d_row, d_col);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Rotate the active piece clockwise, kicking sideways when needed.
    ///
    /// Tries the current column first, then each of [`KICK_OFFSETS`] in order.
    /// When nothing fits the piece keeps its previous shape and column.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = Tetromino {
            shape: active.shape.rotate_cw(),
            ..active
        };
        let candidates = std::iter::once(0).chain(KICK_OFFSETS);
        for d_col in candidates {
            let kicked = rotated.translated(0, d_col);
            if kicked.fits(&self.board) {
                self.active = Some(kicked);
                return true;
            }
        }
        false
    }

    /// Move down one row and restart the gravity timer. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.drop_timer_ms = 0;
        self.try_move(1, 0)
    }

    /// Drop to the lowest valid row and lock. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(1, 0) {
            distance += 1;
        }
        self.lock_and_advance();
        distance
    }

    /// Lowest row the active piece could fall to (renderer aid)
    pub fn ghost_row(&self) -> Option<i8> {
        let mut ghost = self.active?;
        loop {
            let below = ghost.translated(1, 0);
            if !below.fits(&self.board) {
                return Some(ghost.row);
            }
            ghost = below;
        }
    }

    /// Write the active piece into the board, clear full rows and score.
    ///
    /// Cells above the top of the board are dropped. The clear is scored at
    /// the level in effect before the new lines count.
    pub fn lock_and_clear(&mut self) -> ClearReport {
        let Some(active) = self.active.take() else {
            return ClearReport::default();
        };

        for (r, c) in active.cells() {
            if r >= 0 {
                self.board.set(r, c, Some(active.kind));
            }
        }
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let rows = clear_full_rows(&mut self.board);
        let lines = rows.len() as u32;
        let points = line_clear_points(rows.len(), self.level);

        if lines > 0 {
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(lines);
            self.level = self.level.max(level_for_lines(self.lines));
        }

        debug!(
            "tetris: locked {:?} at ({}, {}), cleared {} (+{}), level {}",
            active.kind, active.row, active.col, lines, points, self.level
        );

        ClearReport {
            lines,
            points,
            rows,
        }
    }

    /// Lock, clear, then bring in the next piece.
    fn lock_and_advance(&mut self) {
        let report = self.lock_and_clear();
        self.last_clear = Some(report);
        self.spawn_piece();
    }

    /// Advance gravity by `elapsed_ms` of wall time.
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls one
    /// row and the accumulator restarts from zero, so a long frame never
    /// produces several steps. A blocked fall locks the piece. Returns whether
    /// a gravity step happened.
    ///
    /// Time keeps accumulating while paused, so the first tick after resuming
    /// past the interval drops once.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.phase {
            Phase::Running => {}
            Phase::Paused => {
                self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
                return false;
            }
            Phase::Idle | Phase::GameOver => return false,
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(1, 0) {
            self.lock_and_advance();
        }
        true
    }

    /// Apply a player intent
    ///
    /// Movement only acts while running; `Start`, `Pause` and `Reset` follow
    /// the session lifecycle.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => self.start(),
            Intent::Pause => self.toggle_pause(),
            Intent::Reset => {
                self.reset();
                true
            }
            _ if self.phase != Phase::Running => false,
            Intent::MoveLeft => self.try_move(0, -1),
            Intent::MoveRight => self.try_move(0, 1),
            Intent::Rotate => self.rotate(),
            Intent::SoftDrop => self.soft_drop(),
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(picture: &[&str]) -> TetrisBoard {
        TetrisBoard::from_rows(picture, |c| (c == '#').then_some(PieceKind::O))
    }

    fn running(seed: u32) -> TetrisGame {
        let mut game = TetrisGame::new(seed);
        assert!(game.start());
        game
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = TetrisGame::new(12345);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.active().is_none());
        assert!(game.board().is_clear());
    }

    #[test]
    fn test_start_spawns_active_and_next() {
        let game = running(12345);
        assert_eq!(game.phase(), Phase::Running);
        let active = game.active().unwrap();
        assert_eq!(active.row, 0);
        assert_eq!(active.col, spawn_col(&active.shape, TETRIS_COLS));
        assert!(game.next().is_some());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut game = running(1);
        assert!(!game.start());
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut game = running(777);
        let queued = game.next().unwrap();
        game.spawn_piece();
        assert_eq!(game.active().unwrap().kind, queued);
    }

    #[test]
    fn test_try_move_walls() {
        let mut game = running(12345);
        let mut moved = 0;
        while game.try_move(0, -1) {
            moved += 1;
        }
        assert!(moved <= 4);
        let active = game.active().unwrap();
        assert_eq!(active.col, 0);
        assert!(!game.try_move(0, -1));
        assert_eq!(game.active().unwrap(), active);
    }

    #[test]
    fn test_try_move_blocked_by_occupied_cell() {
        let mut game = running(3);
        game.set_active(Tetromino::spawn(PieceKind::O));
        // O sits at cols 4..=5, rows 0..=1
        game.board_mut().set(2, 4, Some(PieceKind::I));
        assert!(!game.try_move(1, 0));
        assert_eq!(game.active().unwrap().row, 0);
    }

    #[test]
    fn test_cells_above_top_are_allowed() {
        let mut game = running(3);
        game.set_active(Tetromino::spawn(PieceKind::I));
        assert!(game.try_move(-1, 0));
        assert_eq!(game.active().unwrap().row, -1);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut game = running(3);
        game.set_active(Tetromino::spawn(PieceKind::T));
        game.try_move(5, 0);
        assert!(game.rotate());
        let active = game.active().unwrap();
        assert_eq!((active.shape.rows(), active.shape.cols()), (3, 2));
        assert_eq!(active.col, 3);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut game = running(3);
        // Vertical I against the right wall; rotating back to horizontal needs
        // to shift left by 3.
        let vertical = Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 5,
            col: 9,
        };
        game.set_active(vertical);
        assert!(game.rotate());
        let active = game.active().unwrap();
        assert_eq!(active.shape.rows(), 1);
        assert_eq!(active.col, 6);
    }

    #[test]
    fn test_rotate_kick_tries_plus_one_first() {
        let mut game = running(3);
        let mut t = Tetromino::spawn(PieceKind::T);
        t.row = 5;
        game.set_active(t);
        // Rotated in place the T would need (7, 3).
        game.board_mut().set(7, 3, Some(PieceKind::O));
        assert!(game.rotate());
        assert_eq!(game.active().unwrap().col, 4);
    }

    #[test]
    fn test_rotate_kicks_in_order() {
        let mut game = running(3);
        let vertical = Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 5,
            col: 4,
        };
        game.set_active(vertical);
        // Horizontal at col 4 would cover cols 4..=7 on row 5; block col 7.
        game.board_mut().set(5, 7, Some(PieceKind::O));
        // +1 covers 5..=8 (blocked), -1 covers 3..=6 (free)
        assert!(game.rotate());
        assert_eq!(game.active().unwrap().col, 3);
    }

    #[test]
    fn test_rotate_failure_reverts_exactly() {
        let mut game = running(3);
        *game.board_mut() = board_from(&[
            "###.######",
            "###.######",
            "###.######",
            "###.######",
            "###.######",
        ]);
        let vertical = Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 15,
            col: 3,
        };
        game.set_active(vertical);
        assert!(!game.rotate());
        assert_eq!(game.active().unwrap(), vertical);
    }

    #[test]
    fn test_lock_fills_last_cell_clears_one_row() {
        let mut game = running(3);
        *game.board_mut() = board_from(&["#########."]);
        let vertical = Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 16,
            col: 9,
        };
        game.set_active(vertical);
        let report = game.lock_and_clear();
        assert_eq!(report.lines, 1);
        assert_eq!(report.points, 40);
        assert_eq!(game.score(), 40);
        assert_eq!(game.lines(), 1);
        // the three I cells above the cleared row fell by one
        assert_eq!(game.board().occupied_count(), 3);
        assert!(game.board().is_occupied(19, 9));
        assert!(game.board().is_occupied(17, 9));
        assert!(!game.board().is_occupied(16, 9));
    }

    #[test]
    fn test_points_scale_with_current_level() {
        let mut game = running(3);
        game.level = 3;
        *game.board_mut() = board_from(&["#########."]);
        game.set_active(Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 16,
            col: 9,
        });
        assert_eq!(game.lock_and_clear().points, 120);
    }

    #[test]
    fn test_adjacent_full_rows_rescan_same_index() {
        let mut board = board_from(&["..#.......", "##########", "##########"]);
        let rows = clear_full_rows(&mut board);
        assert_eq!(rows.as_slice(), &[19, 19]);
        assert!(board.is_occupied(19, 2));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_separated_full_rows_both_clear() {
        let mut board = board_from(&["##########", "#.#.......", "##########"]);
        let rows = clear_full_rows(&mut board);
        assert_eq!(rows.as_slice(), &[19, 18]);
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(19, 0));
        assert!(board.is_occupied(19, 2));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut board = board_from(&["#.########", "##########"]);
        assert_eq!(clear_full_rows(&mut board).len(), 1);
        let after = board.clone();
        assert!(clear_full_rows(&mut board).is_empty());
        assert_eq!(board, after);
    }

    #[test]
    fn test_cells_above_top_dropped_on_lock() {
        let mut game = running(3);
        let piece = Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: -2,
            col: 0,
        };
        game.set_active(piece);
        game.lock_and_clear();
        assert_eq!(game.board().occupied_count(), 2);
        assert!(game.board().is_occupied(0, 0));
        assert!(game.board().is_occupied(1, 0));
    }

    #[test]
    fn test_level_up_after_ten_lines() {
        let mut game = running(3);
        game.lines = 9;
        *game.board_mut() = board_from(&["#########."]);
        game.set_active(Tetromino {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotate_cw(),
            row: 16,
            col: 9,
        });
        game.lock_and_clear();
        assert_eq!(game.lines(), 10);
        assert_eq!(game.level(), 2);
        assert_eq!(game.drop_interval_ms(), 450);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut game = running(12345);
        let row = game.active().unwrap().row;
        assert!(!game.tick(500));
        assert_eq!(game.active().unwrap().row, row);
        assert!(game.tick(1));
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn test_tick_has_no_catch_up() {
        let mut game = running(12345);
        let row = game.active().unwrap().row;
        assert!(game.tick(5000));
        assert_eq!(game.active().unwrap().row, row + 1);
        assert!(!game.tick(16));
    }

    #[test]
    fn test_tick_locks_when_blocked() {
        let mut game = running(12345);
        while game.try_move(1, 0) {}
        let locked_before = game.pieces_locked();
        assert!(game.tick(501));
        assert_eq!(game.pieces_locked(), locked_before + 1);
        assert_eq!(game.active().unwrap().row, 0);
    }

    #[test]
    fn test_paused_tick_is_skipped() {
        let mut game = running(12345);
        assert!(game.apply(Intent::Pause));
        assert_eq!(game.phase(), Phase::Paused);
        let before = game.active();
        assert!(!game.tick(10_000));
        assert!(!game.apply(Intent::MoveLeft));
        assert_eq!(game.active(), before);
        assert!(game.apply(Intent::Pause));
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_resume_drops_once_after_long_pause() {
        let mut game = running(12345);
        let row = game.active().unwrap().row;
        assert!(game.toggle_pause());
        assert!(!game.tick(10_000));
        assert!(game.toggle_pause());

        assert!(game.tick(1));
        assert_eq!(game.active().unwrap().row, row + 1);
        assert!(!game.tick(16));
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn test_hard_drop_keeps_gravity_timer() {
        let mut game = running(12345);
        assert!(!game.tick(400));
        game.hard_drop();
        let row = game.active().unwrap().row;
        assert!(game.tick(101));
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn test_soft_drop_restarts_timer() {
        let mut game = running(12345);
        game.tick(400);
        assert!(game.soft_drop());
        let row = game.active().unwrap().row;
        assert!(!game.tick(400));
        assert_eq!(game.active().unwrap().row, row);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut game = running(12345);
        while game.soft_drop() {}
        assert_eq!(game.pieces_locked(), 0);
        assert!(!game.soft_drop());
    }

    #[test]
    fn test_hard_drop_locks_and_promotes() {
        let mut game = running(12345);
        let queued = game.next().unwrap();
        let distance = game.hard_drop();
        assert!(distance > 0);
        assert_eq!(game.pieces_locked(), 1);
        assert_eq!(game.active().unwrap().kind, queued);
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut game = running(12345);
        for c in 0..TETRIS_COLS as i8 {
            if c != 0 {
                game.board_mut().set(1, c, Some(PieceKind::Z));
            }
        }
        game.board_mut().set(0, 4, Some(PieceKind::Z));
        game.board_mut().set(0, 5, Some(PieceKind::Z));
        game.spawn_piece();
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.tick(1000));
        assert!(!game.apply(Intent::HardDrop));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = running(12345);
        game.board_mut().set(0, 3, Some(PieceKind::Z));
        game.board_mut().set(0, 4, Some(PieceKind::Z));
        game.board_mut().set(0, 5, Some(PieceKind::Z));
        game.spawn_piece();
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.apply(Intent::Start));
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.board().is_clear());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut game = running(12345);
        game.hard_drop();
        assert!(game.apply(Intent::Reset));
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.board().is_clear());
        assert!(game.active().is_none());
        assert_eq!(game.episode(), 1);
    }

    #[test]
    fn test_ghost_row_is_floor() {
        let mut game = running(3);
        game.set_active(Tetromino::spawn(PieceKind::O));
        assert_eq!(game.ghost_row(), Some(18));
    }
}
