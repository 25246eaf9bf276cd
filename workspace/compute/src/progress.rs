use common::{SkillLevel, StudentAnalyticsStats};
use model::entities::{goal, progress_record};

use crate::round2;

/// Mean progress over all of a user's goals (completed ones included),
/// rounded to the nearest integer. Zero when there are no goals.
pub fn overall_progress(goals: &[goal::Model]) -> i64 {
    if goals.is_empty() {
        return 0;
    }
    let sum: f64 = goals.iter().map(|g| f64::from(g.progress)).sum();
    (sum / goals.len() as f64).round() as i64
}

/// Collapses an append-only progress log to the latest level per skill.
///
/// The log is scanned newest-first, so the output lists the most recently
/// updated skill first and keeps exactly one entry per skill name.
pub fn latest_skill_levels(records: &[progress_record::Model]) -> Vec<SkillLevel> {
    let mut ordered: Vec<(usize, &progress_record::Model)> = records.iter().enumerate().collect();
    // Timestamp ties fall back to insertion order, later row wins.
    ordered.sort_by(|(ai, a), (bi, b)| b.recorded_at.cmp(&a.recorded_at).then(bi.cmp(ai)));

    let mut latest: Vec<SkillLevel> = Vec::new();
    for (_, record) in ordered {
        if latest.iter().any(|s| s.skill_name == record.skill_name) {
            continue;
        }
        latest.push(SkillLevel {
            skill_name: record.skill_name.clone(),
            level: record.level,
        });
    }
    latest
}

/// Mean of the latest level per skill, rounded to two decimals.
pub fn average_skill_level(levels: &[SkillLevel]) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let sum: f64 = levels.iter().map(|s| f64::from(s.level)).sum();
    round2(sum / levels.len() as f64)
}

/// Per-student aggregates for the admin analytics view. `skills_count` is the
/// length of the student's profile skill list, which can differ from the set
/// of skills with recorded progress.
pub fn student_analytics(
    goals: &[goal::Model],
    records: &[progress_record::Model],
    skills_count: usize,
) -> StudentAnalyticsStats {
    let levels = latest_skill_levels(records);
    StudentAnalyticsStats {
        total_goals: goals.len(),
        completed_goals: goals
            .iter()
            .filter(|g| g.status == goal::GoalStatus::Completed)
            .count(),
        in_progress_goals: goals
            .iter()
            .filter(|g| g.status == goal::GoalStatus::InProgress)
            .count(),
        total_skills: skills_count,
        average_skill_level: average_skill_level(&levels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use model::entities::goal::{GoalKind, GoalStatus};
    use uuid::Uuid;

    fn goal_with(progress: i32, status: GoalStatus) -> goal::Model {
        goal::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "goal".to_string(),
            description: None,
            kind: GoalKind::LongTerm,
            specific: None,
            measurable: None,
            achievable: None,
            relevant: None,
            time_bound: None,
            progress,
            status,
            target_date: None,
            created_at: Utc::now(),
        }
    }

    fn record(skill: &str, level: i32, age_days: i64) -> progress_record::Model {
        progress_record::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            skill_name: skill.to_string(),
            level,
            recorded_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn no_goals_means_zero_progress() {
        assert_eq!(overall_progress(&[]), 0);
    }

    #[test]
    fn progress_is_the_rounded_mean_over_all_goals() {
        let goals = vec![
            goal_with(100, GoalStatus::Completed),
            goal_with(50, GoalStatus::InProgress),
            goal_with(25, GoalStatus::Cancelled),
        ];
        // (100 + 50 + 25) / 3 = 58.33 -> 58
        assert_eq!(overall_progress(&goals), 58);
    }

    #[test]
    fn latest_record_wins_per_skill() {
        let records = vec![
            record("Rust", 30, 10),
            record("Rust", 60, 1),
            record("SQL", 40, 5),
        ];
        let levels = latest_skill_levels(&records);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0], SkillLevel { skill_name: "Rust".to_string(), level: 60 });
        assert_eq!(levels[1], SkillLevel { skill_name: "SQL".to_string(), level: 40 });
    }

    #[test]
    fn timestamp_ties_resolve_to_the_later_record() {
        let shared = Utc::now();
        let mut first = record("Rust", 40, 0);
        first.recorded_at = shared;
        let mut second = record("Rust", 70, 0);
        second.recorded_at = shared;

        let levels = latest_skill_levels(&[first, second]);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].level, 70);
    }

    #[test]
    fn analytics_counts_statuses_and_averages_levels() {
        let goals = vec![
            goal_with(100, GoalStatus::Completed),
            goal_with(10, GoalStatus::InProgress),
            goal_with(0, GoalStatus::Cancelled),
        ];
        let records = vec![record("Rust", 60, 1), record("SQL", 41, 2)];

        let stats = student_analytics(&goals, &records, 4);
        assert_eq!(stats.total_goals, 3);
        assert_eq!(stats.completed_goals, 1);
        assert_eq!(stats.in_progress_goals, 1);
        assert_eq!(stats.total_skills, 4);
        assert_eq!(stats.average_skill_level, 50.5);
    }

    #[test]
    fn analytics_for_empty_student() {
        let stats = student_analytics(&[], &[], 0);
        assert_eq!(stats.total_goals, 0);
        assert_eq!(stats.average_skill_level, 0.0);
    }
}
