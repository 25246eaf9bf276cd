use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the student leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub name: String,
    /// Composite score, rounded to two decimal places.
    pub score: f64,
    pub skills_count: usize,
    pub completed_goals: usize,
    /// Mean goal progress, 0..=100.
    pub overall_progress: f64,
    pub gpa: Option<f32>,
    /// 1-based position after sorting by score.
    pub rank: usize,
}

/// Response of the ranking endpoint: the full leaderboard plus the caller's
/// own row (when the caller is a student present in the board).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub current_user: Option<LeaderboardEntry>,
    pub total: usize,
}
