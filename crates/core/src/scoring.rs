//! Scoring module - classic batch scoring and level progression
//!
//! - A batch of N simultaneously completed rows scores `LINE_SCORES[N] * (level + 1)`.
//! - The level rises by one once the running row count reaches
//!   `ROWS_PER_LEVEL * (level + 1)`.
//! - Each level-up shortens the gravity interval by a sixth of its current
//!   value (integer division), so it keeps shrinking without reaching zero.

use crate::types::{LINE_SCORES, ROWS_PER_LEVEL};

/// Outcome of scoring one cleared batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchResult {
    pub score: u32,
    pub completed_rows: u32,
    pub level: u32,
    pub speed_ms: u64,
    pub leveled_up: bool,
}

/// Points for clearing `rows` rows at once at `level`.
///
/// Zero rows score nothing. Batches larger than four (only reachable from a
/// hand-built board) are scored as four.
pub fn batch_score(rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let base = LINE_SCORES[rows.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level.saturating_add(1))
}

/// Speed after a level-up: `speed - speed / 6`.
pub fn accelerate(speed_ms: u64) -> u64 {
    speed_ms - speed_ms / 6
}

/// Whether `completed_rows` reaches the threshold of the level after `level`.
pub fn reaches_next_level(completed_rows: u32, level: u32) -> bool {
    completed_rows >= ROWS_PER_LEVEL.saturating_mul(level.saturating_add(1))
}

/// Apply one cleared batch to score, row count, level and speed.
pub fn apply_batch(
    rows: usize,
    score: u32,
    completed_rows: u32,
    level: u32,
    speed_ms: u64,
) -> BatchResult {
    if rows == 0 {
        return BatchResult {
            score,
            completed_rows,
            level,
            speed_ms,
            leveled_up: false,
        };
    }

    let score = score.saturating_add(batch_score(rows, level));
    let completed_rows = completed_rows.saturating_add(rows as u32);

    if reaches_next_level(completed_rows, level) {
        BatchResult {
            score,
            completed_rows,
            level: level + 1,
            speed_ms: accelerate(speed_ms),
            leveled_up: true,
        }
    } else {
        BatchResult {
            score,
            completed_rows,
            level,
            speed_ms,
            leveled_up: false,
        }
    }
}
