//! Display-only XP level curve.
//!
//! The server is authoritative for leveling decisions; these helpers exist
//! solely to draw the navbar XP bar. The curve matches the server exactly:
//! `xp_for_level(level) = round(100 * (level + 1)^1.5)`.

use crate::models::Progress;

/// Total XP required to reach the next level after `level`.
pub fn xp_for_level(level: i64) -> i64 {
    let base = (level + 1).max(0) as f64;
    (100.0 * base.powf(1.5)).round() as i64
}

/// Percentage of the way through the current level, clamped to [0, 100].
pub fn xp_progress_percent(progress: &Progress) -> f64 {
    let current_level_xp = xp_for_level(progress.level - 1);
    let next_level_xp = xp_for_level(progress.level);
    let range = (next_level_xp - current_level_xp) as f64;
    if range <= 0.0 {
        return 0.0;
    }
    let current = (progress.total_xp - current_level_xp) as f64;
    (current / range * 100.0).clamp(0.0, 100.0)
}
