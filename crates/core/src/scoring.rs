//! Scoring module - line clear points, level progression and gravity speed
//!
//! Points for a clear are `LINE_SCORES[cleared] * level`, using the level in
//! effect before the clear is counted. The level is derived from total lines.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS,
};

/// Points for clearing `cleared` rows at `level`.
/// Anything outside 1..=4 rows scores nothing.
pub fn line_clear_score(cleared: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(cleared)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level after `lines` total cleared rows (starts at 1).
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level`, floored at `MIN_DROP_MS`.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}
