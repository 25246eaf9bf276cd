use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers for a student's own dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardStats {
    /// Goals not yet completed.
    pub goals_count: usize,
    pub completed_goals: usize,
    pub skills_count: usize,
    /// Size of the current top-5 career recommendation list.
    pub careers_count: usize,
    /// Mean progress over all goals, rounded to the nearest integer.
    pub overall_progress: i64,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    pub total_students: u64,
    pub total_careers: u64,
    pub total_opportunities: u64,
    pub total_resources: u64,
}

/// Per-student aggregates shown on the admin analytics view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnalyticsStats {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub in_progress_goals: usize,
    pub total_skills: usize,
    /// Mean of the latest level per skill, rounded to two decimals. Zero when
    /// the student has no recorded skills.
    pub average_skill_level: f64,
}
