//! Game state module - the cluster-matching session
//!
//! A pair falls one row every [`PUYO_DROP_FRAMES`] frames. When it can fall
//! no further its cells are written into the board and the board is resolved
//! (gravity, cluster removal, chains) before the next pair enters.

use log::{debug, info};

use crate::puyo::pair::Pair;
use crate::puyo::resolve::{resolve, PuyoBoard, ResolveReport};
use crate::rng::SimpleRng;
use crate::types::{Intent, Phase, PuyoColor, PUYO_COLS, PUYO_DROP_FRAMES, PUYO_ROWS};

/// Complete cluster-matching session
#[derive(Debug, Clone)]
pub struct PuyoGame {
    phase: Phase,
    board: PuyoBoard,
    active: Option<Pair>,
    next: Option<[PuyoColor; 2]>,
    rng: SimpleRng,
    episode: u32,
    pairs_placed: u32,
    score: u32,
    frame_counter: u32,
    last_resolve: Option<ResolveReport>,
}

impl PuyoGame {
    pub fn new(seed: u32) -> Self {
        Self {
            phase: Phase::Idle,
            board: PuyoBoard::new(),
            active: None,
            next: None,
            rng: SimpleRng::new(seed),
            episode: 0,
            pairs_placed: 0,
            score: 0,
            frame_counter: 0,
            last_resolve: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn pairs_placed(&self) -> u32 {
        self.pairs_placed
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn active(&self) -> Option<Pair> {
        self.active
    }

    pub fn next(&self) -> Option<[PuyoColor; 2]> {
        self.next
    }

    pub fn board(&self) -> &PuyoBoard {
        &self.board
    }

    /// Direct board access for scenario setup and tooling.
    pub fn board_mut(&mut self) -> &mut PuyoBoard {
        &mut self.board
    }

    /// Replace the active pair (scenario setup).
    pub fn set_active(&mut self, pair: Pair) {
        self.active = Some(pair);
    }

    pub fn last_resolve(&self) -> Option<&ResolveReport> {
        self.last_resolve.as_ref()
    }

    /// Begin a fresh session. Only valid from `Idle` or `GameOver`.
    pub fn start(&mut self) -> bool {
        if !self.phase.can_start() {
            return false;
        }
        self.board.clear();
        self.active = None;
        self.next = None;
        self.pairs_placed = 0;
        self.score = 0;
        self.frame_counter = 0;
        self.last_resolve = None;
        self.phase = Phase::Running;
        info!("puyo: session {} started", self.episode);
        self.spawn_pair();
        true
    }

    /// Discard the session and return to `Idle`, keeping the RNG stream.
    pub fn reset(&mut self) {
        let episode = self.episode.wrapping_add(1);
        *self = Self::new(self.rng.state());
        self.episode = episode;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return false,
        };
        true
    }

    fn draw_colors(&mut self) -> [PuyoColor; 2] {
        [self.rng.puyo_color(), self.rng.puyo_color()]
    }

    /// Bring in the queued pair and queue another.
    ///
    /// The frame counter keeps running across spawns; only a gravity step
    /// resets it.
    ///
    /// Unlike a falling pair, a fresh pair must sit entirely on the board and
    /// on empty cells; otherwise the session ends.
    pub fn spawn_pair(&mut self) -> bool {
        let colors = match self.next.take() {
            Some(colors) => colors,
            None => self.draw_colors(),
        };
        self.next = Some(self.draw_colors());

        let pair = Pair::spawn(colors);
        self.active = Some(pair);

        if !self.is_resting_position(&pair) {
            self.phase = Phase::GameOver;
            info!(
                "puyo: game over, spawn blocked (score {}, pairs {})",
                self.score, self.pairs_placed
            );
            return false;
        }
        true
    }

    /// Both cells on the board and on empty cells.
    fn is_resting_position(&self, pair: &Pair) -> bool {
        pair.cells()
            .iter()
            .all(|cell| self.board.is_empty_at(cell.row, cell.col))
    }

    /// Whether the active pair could move by `(d_row, d_col)`.
    ///
    /// Columns must stay on the board and rows above the floor. Cells above
    /// the top row are allowed while the pair is entering; cells on the board
    /// must land on empty cells.
    pub fn can_move(&self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        active.cells().iter().all(|cell| {
            let row = cell.row + d_row;
            let col = cell.col + d_col;
            if col < 0 || col as usize >= PUYO_COLS || row >= PUYO_ROWS as i8 {
                return false;
            }
            row < 0 || self.board.is_empty_at(row, col)
        })
    }

    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        if !self.can_move(d_row, d_col) {
            return false;
        }
        self.active = self.active.map(|pair| pair.translated(d_row, d_col));
        true
    }

    /// Turn the satellite a quarter clockwise around the anchor.
    ///
    /// There are no kicks: if either cell of the turned pair is off the board
    /// (above the top included) or occupied, the orientation is left alone.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let turned = active.rotated();
        if self.is_resting_position(&turned) {
            self.active = Some(turned);
            return true;
        }
        false
    }

    /// Step down one row, or place the pair when it cannot fall.
    ///
    /// Returns true when the pair moved, false when it was placed (or there
    /// was nothing to move).
    pub fn move_down(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(1, 0) {
            return true;
        }
        self.place_and_resolve();
        false
    }

    /// Drop to rest and place. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(1, 0) {
            distance += 1;
        }
        self.place_and_resolve();
        distance
    }

    /// Write the active pair into the board, resolve, then spawn the next.
    ///
    /// Cells above the top row are discarded. If that leaves nothing to
    /// write, the session ends without resolving and `None` is returned.
    pub fn place_and_resolve(&mut self) -> Option<ResolveReport> {
        let active = self.active.take()?;

        let mut written = 0;
        for cell in active.cells() {
            if self.board.set(cell.row, cell.col, Some(cell.color)) {
                written += 1;
            }
        }
        if written == 0 {
            self.phase = Phase::GameOver;
            info!(
                "puyo: game over, pair placed above the board (score {})",
                self.score
            );
            return None;
        }
        self.pairs_placed = self.pairs_placed.wrapping_add(1);

        let report = resolve(&mut self.board);
        self.score = self.score.saturating_add(report.points);
        if report.chains > 0 {
            debug!(
                "puyo: {} chain(s) removed {} cells (+{})",
                report.chains, report.removed, report.points
            );
        }
        self.last_resolve = Some(report.clone());

        self.spawn_pair();
        Some(report)
    }

    /// Advance `frames` frames of the drop counter.
    ///
    /// Every [`PUYO_DROP_FRAMES`]th frame the pair steps down or is placed.
    /// Stops early once the session is no longer running. Returns the number
    /// of gravity steps taken.
    pub fn tick(&mut self, frames: u32) -> u32 {
        let mut steps = 0;
        for _ in 0..frames {
            if self.phase != Phase::Running {
                break;
            }
            self.frame_counter += 1;
            if self.frame_counter < PUYO_DROP_FRAMES {
                continue;
            }
            self.frame_counter = 0;
            self.move_down();
            steps += 1;
        }
        steps
    }

    /// Apply a player intent
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
            Intent::SoftDrop => {
                self.move_down();
                true
            }
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }
}

impl Default for PuyoGame {
    fn default() -> Self {
        Self::new(1)
    }
}
