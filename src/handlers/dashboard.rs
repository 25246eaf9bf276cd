use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use common::{AdminDashboardStats, StudentDashboardStats};
use compute::{overall_progress, recommend_careers};
use model::entities::user::Role;
use model::entities::{career, goal, opportunity, profile, resource, user};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::auth::extract::CurrentUser;
use crate::error::ApiResult;
use crate::handlers::careers::RECOMMENDATION_LIMIT;
use crate::schemas::AppState;

/// Dashboard statistics for the caller.
///
/// Shape depends on role: admins get platform-wide counts, students get a
/// summary of their own goals, skills and progress.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard statistics retrieved"),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Response> {
    if user.role == Role::Admin {
        let stats = AdminDashboardStats {
            total_students: user::Entity::find()
                .filter(user::Column::Role.eq(Role::Student))
                .count(&state.db)
                .await?,
            total_careers: career::Entity::find().count(&state.db).await?,
            total_opportunities: opportunity::Entity::find().count(&state.db).await?,
            total_resources: resource::Entity::find().count(&state.db).await?,
        };
        return Ok(Json(stats).into_response());
    }

    let goals = goal::Entity::find()
        .filter(goal::Column::UserId.eq(user.id))
        .all(&state.db)
        .await?;
    let profile = profile::Entity::find()
        .filter(profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?;
    let skills: Vec<String> = profile
        .and_then(|p| p.skills)
        .map(|s| s.0)
        .unwrap_or_default();

    let careers = career::Entity::find()
        .order_by_asc(career::Column::Title)
        .all(&state.db)
        .await?;
    let recommended = recommend_careers(&careers, &skills, RECOMMENDATION_LIMIT);

    let completed = goals
        .iter()
        .filter(|g| g.status == goal::GoalStatus::Completed)
        .count();
    let stats = StudentDashboardStats {
        goals_count: goals.len() - completed,
        completed_goals: completed,
        skills_count: skills.len(),
        careers_count: recommended.len(),
        overall_progress: overall_progress(&goals),
    };
    Ok(Json(stats).into_response())
}
