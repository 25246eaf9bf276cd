//! Transport-layer types shared between the HTTP layer and the compute crate.
//! These structs are the wire shapes of the dashboard, ranking, and progress
//! endpoints, so the scoring code can produce responses without depending on
//! the web stack.

mod ranking;
mod stats;

pub use ranking::{LeaderboardEntry, RankingResponse};
pub use stats::{AdminDashboardStats, StudentAnalyticsStats, StudentDashboardStats};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One skill with its most recently recorded proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevel {
    pub skill_name: String,
    /// 0..=100.
    pub level: i32,
}
