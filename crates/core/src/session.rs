//! Common driving surface for both engines.
//!
//! Front ends (the terminal loop and the headless runner) only ever feed a
//! session intents and frame time, then read back a snapshot.

use serde::Serialize;

use crate::puyo::PuyoGame;
use crate::snapshot::{PuyoSnapshot, TetrisSnapshot};
use crate::tetris::TetrisGame;
use crate::types::{Intent, Phase};

pub trait GameSession {
    type Snapshot: Serialize;

    /// Short name used in logs and output.
    const NAME: &'static str;

    fn apply(&mut self, intent: Intent) -> bool;

    /// Advance by one frame that took `elapsed_ms`. Returns whether gravity
    /// moved or placed anything.
    fn on_frame(&mut self, elapsed_ms: u32) -> bool;

    fn phase(&self) -> Phase;

    fn score(&self) -> u32;

    fn snapshot(&self) -> Self::Snapshot;
}

impl GameSession for TetrisGame {
    type Snapshot = TetrisSnapshot;

    const NAME: &'static str = "tetris";

    fn apply(&mut self, intent: Intent) -> bool {
        TetrisGame::apply(self, intent)
    }

    fn on_frame(&mut self, elapsed_ms: u32) -> bool {
        self.tick(elapsed_ms)
    }

    fn phase(&self) -> Phase {
        TetrisGame::phase(self)
    }

    fn score(&self) -> u32 {
        TetrisGame::score(self)
    }

    fn snapshot(&self) -> TetrisSnapshot {
        TetrisGame::snapshot(self)
    }
}

/// The drop counter counts frames, so frame duration is ignored.
impl GameSession for PuyoGame {
    type Snapshot = PuyoSnapshot;

    const NAME: &'static str = "puyo";

    fn apply(&mut self, intent: Intent) -> bool {
        PuyoGame::apply(self, intent)
    }

    fn on_frame(&mut self, _elapsed_ms: u32) -> bool {
        self.tick(1) > 0
    }

    fn phase(&self) -> Phase {
        PuyoGame::phase(self)
    }

    fn score(&self) -> u32 {
        PuyoGame::score(self)
    }

    fn snapshot(&self) -> PuyoSnapshot {
        PuyoGame::snapshot(self)
    }
}
