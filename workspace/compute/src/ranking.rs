use common::{LeaderboardEntry, RankingResponse};
use model::entities::{goal, profile, user};
use tracing::debug;
use uuid::Uuid;

use crate::progress::overall_progress;
use crate::round2;

/// Composite leaderboard score for one student, rounded to two decimals.
///
/// Weights: 2 points per skill, 5 per completed goal, 0.4 per point of mean
/// goal progress, and up to 20 from GPA on a 4.0 scale. GPA is clamped to
/// [0, 4] before scoring so out-of-range values cannot unbound the score; a
/// missing GPA contributes zero.
pub fn composite_score(
    skills_count: usize,
    completed_goals: usize,
    overall_progress: i64,
    gpa: Option<f32>,
) -> f64 {
    let gpa_score = gpa
        .map(|g| (f64::from(g.clamp(0.0, 4.0)) / 4.0) * 20.0)
        .unwrap_or(0.0);
    round2(
        skills_count as f64 * 2.0
            + completed_goals as f64 * 5.0
            + overall_progress as f64 * 0.4
            + gpa_score,
    )
}

/// Builds the full leaderboard from already-loaded rows.
///
/// Students are scored via [`composite_score`], sorted descending by score
/// (stable, so retrieval order breaks ties), and assigned 1-based ranks.
pub fn build_leaderboard(
    students: &[user::Model],
    profiles: &[profile::Model],
    goals: &[goal::Model],
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = students
        .iter()
        .map(|student| {
            let profile = profiles.iter().find(|p| p.user_id == student.id);
            let own_goals: Vec<goal::Model> = goals
                .iter()
                .filter(|g| g.user_id == student.id)
                .cloned()
                .collect();

            let skills_count = profile
                .and_then(|p| p.skills.as_ref())
                .map_or(0, |s| s.len());
            let completed_goals = own_goals
                .iter()
                .filter(|g| g.status == goal::GoalStatus::Completed)
                .count();
            let progress = overall_progress(&own_goals);
            let gpa = profile.and_then(|p| p.gpa);

            LeaderboardEntry {
                user_id: student.id,
                name: student.name.clone(),
                score: composite_score(skills_count, completed_goals, progress, gpa),
                skills_count,
                completed_goals,
                overall_progress: progress as f64,
                gpa,
                rank: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }

    debug!(students = entries.len(), "built leaderboard");
    entries
}

/// Assembles the ranking response for one viewer.
///
/// The viewer's own entry is looked up in the board; an admin (or any user
/// without a row) simply gets no `current_user`.
pub fn student_ranking(
    students: &[user::Model],
    profiles: &[profile::Model],
    goals: &[goal::Model],
    viewer_id: Uuid,
) -> RankingResponse {
    let leaderboard = build_leaderboard(students, profiles, goals);
    let current_user = leaderboard.iter().find(|e| e.user_id == viewer_id).cloned();
    let total = leaderboard.len();
    RankingResponse {
        leaderboard,
        current_user,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model::StringList;
    use model::entities::goal::{GoalKind, GoalStatus};
    use model::entities::user::Role;

    fn student(name: &str) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: String::new(),
            name: name.to_string(),
            role: Role::Student,
            year_level: None,
            course: None,
            avatar_url: None,
        }
    }

    fn profile_for(user_id: Uuid, skills: &[&str], gpa: Option<f32>) -> profile::Model {
        profile::Model {
            id: Uuid::new_v4(),
            user_id,
            gpa,
            skills: Some(StringList::from(skills.to_vec())),
            interests: None,
            career_preferences: None,
            certifications: None,
            subjects_taken: None,
            resume_url: None,
            bio: None,
        }
    }

    fn goal_for(user_id: Uuid, progress: i32, status: GoalStatus) -> goal::Model {
        goal::Model {
            id: Uuid::new_v4(),
            user_id,
            title: "goal".to_string(),
            description: None,
            kind: GoalKind::ShortTerm,
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

    #[test]
    fn worked_score_examples() {
        // skills=5, completed=2, progress=80, gpa=3.6
        assert_eq!(composite_score(5, 2, 80, Some(3.6)), 70.00);
        // skills=2, completed=4, progress=50, no gpa
        assert_eq!(composite_score(2, 4, 50, None), 44.00);
    }

    #[test]
    fn gpa_is_clamped_before_scoring() {
        assert_eq!(composite_score(0, 0, 0, Some(9.0)), 20.00);
        assert_eq!(composite_score(0, 0, 0, Some(-1.0)), 0.00);
    }

    #[test]
    fn ranks_are_one_based_and_gapless() {
        let a = student("Alice");
        let b = student("Bob");
        let c = student("Carol");
        let profiles = vec![
            profile_for(a.id, &["Rust", "SQL"], Some(3.5)),
            profile_for(b.id, &["Rust"], None),
        ];
        let goals = vec![
            goal_for(a.id, 100, GoalStatus::Completed),
            goal_for(b.id, 40, GoalStatus::InProgress),
        ];

        let board = build_leaderboard(&[a, b, c], &profiles, &goals);
        assert_eq!(board.len(), 3);
        let ranks: Vec<usize> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        for pair in board.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_retrieval_order() {
        let a = student("Alice");
        let b = student("Bob");
        let board = build_leaderboard(&[a.clone(), b.clone()], &[], &[]);
        assert_eq!(board[0].user_id, a.id);
        assert_eq!(board[1].user_id, b.id);
    }

    #[test]
    fn student_without_profile_or_goals_scores_zero() {
        let a = student("Alice");
        let board = build_leaderboard(&[a], &[], &[]);
        assert_eq!(board[0].score, 0.0);
        assert_eq!(board[0].skills_count, 0);
        assert_eq!(board[0].overall_progress, 0.0);
    }

    #[test]
    fn viewer_entry_is_resolved() {
        let a = student("Alice");
        let b = student("Bob");
        let viewer = a.id;
        let response = student_ranking(&[a, b], &[], &[], viewer);
        assert_eq!(response.total, 2);
        assert_eq!(response.current_user.as_ref().map(|e| e.user_id), Some(viewer));
    }

    #[test]
    fn admin_viewer_has_no_entry() {
        let a = student("Alice");
        let response = student_ranking(&[a], &[], &[], Uuid::new_v4());
        assert!(response.current_user.is_none());
    }
}
