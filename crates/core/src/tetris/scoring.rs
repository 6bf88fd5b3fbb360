//! Scoring module - classic line-clear points, levels and gravity speed
//!
//! - 1/2/3/4 lines in one lock score 40/100/300/1200, multiplied by the level.
//! - Levels start at 1 and go up every 10 cleared lines.
//! - Gravity starts at 500ms per row and speeds up by 50ms per level down to
//!   a 100ms floor.

use blockdrop_types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in a single lock at `level`.
///
/// Counts above four only happen on hand-built boards and score as four.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let idx = lines.min(LINE_SCORES.len()) - 1;
    LINE_SCORES[idx].saturating_mul(level)
}

/// Level reached after clearing `total_lines` lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval at `level`.
pub fn drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_FLOOR_MS)
}
