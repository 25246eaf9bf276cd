//! Pure scoring and aggregation logic: career recommendation, the student
//! leaderboard, and progress/dashboard arithmetic.
//!
//! Everything here operates on rows already loaded from storage and performs
//! no I/O, so each function can be unit tested with literal values.

pub mod progress;
pub mod ranking;
pub mod recommend;

pub use progress::{average_skill_level, latest_skill_levels, overall_progress, student_analytics};
pub use ranking::{build_leaderboard, composite_score, student_ranking};
pub use recommend::recommend_careers;

/// Rounds to two decimal places, the precision used for scores throughout.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
