use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use model::entities::goal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Request body for creating a goal
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: goal::GoalKind,
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub time_bound: Option<String>,
    /// Initial progress, defaults to 0
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    #[serde(default)]
    pub progress: i32,
    pub target_date: Option<chrono::DateTime<Utc>>,
}

/// Request body for updating a goal. Status and progress are independent:
/// setting progress to 100 does not complete the goal and completing the
/// goal does not touch progress.
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<goal::GoalKind>,
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub time_bound: Option<String>,
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    pub progress: Option<i32>,
    pub status: Option<goal::GoalStatus>,
    pub target_date: Option<chrono::DateTime<Utc>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentGoalsQuery {
    /// Maximum number of goals to return (default 5)
    pub limit: Option<u64>,
}

/// Loads a goal only when it belongs to `user_id`. Someone else's goal is
/// reported as missing, never as forbidden, so ids cannot be probed.
async fn find_owned_goal(
    state: &AppState,
    goal_id: Uuid,
    user_id: Uuid,
) -> ApiResult<goal::Model> {
    goal::Entity::find()
        .filter(goal::Column::Id.eq(goal_id))
        .filter(goal::Column::UserId.eq(user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))
}

/// List the caller's goals, newest first
#[utoipa::path(
    get,
    path = "/api/goals",
    tag = "goals",
    responses(
        (status = 200, description = "Goals retrieved", body = Vec<model::entities::goal::Model>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_goals(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<goal::Model>>> {
    let goals = goal::Entity::find()
        .filter(goal::Column::UserId.eq(user.id))
        .order_by_desc(goal::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(goals))
}

/// List the caller's most recent goals
#[utoipa::path(
    get,
    path = "/api/goals/recent",
    tag = "goals",
    params(RecentGoalsQuery),
    responses(
        (status = 200, description = "Recent goals retrieved", body = Vec<model::entities::goal::Model>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_recent_goals(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<RecentGoalsQuery>,
) -> ApiResult<Json<Vec<goal::Model>>> {
    let goals = goal::Entity::find()
        .filter(goal::Column::UserId.eq(user.id))
        .order_by_desc(goal::Column::CreatedAt)
        .limit(query.limit.unwrap_or(5))
        .all(&state.db)
        .await?;
    Ok(Json(goals))
}

/// Create a goal for the caller
#[utoipa::path(
    post,
    path = "/api/goals",
    tag = "goals",
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created", body = model::entities::goal::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_goal(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateGoalRequest>,
) -> ApiResult<(StatusCode, Json<goal::Model>)> {
    request.validate()?;

    let new_goal = goal::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        title: Set(request.title),
        description: Set(request.description),
        kind: Set(request.kind),
        specific: Set(request.specific),
        measurable: Set(request.measurable),
        achievable: Set(request.achievable),
        relevant: Set(request.relevant),
        time_bound: Set(request.time_bound),
        progress: Set(request.progress),
        status: Set(goal::GoalStatus::InProgress),
        target_date: Set(request.target_date),
        created_at: Set(Utc::now()),
    };
    let created = new_goal.insert(&state.db).await?;

    info!("Goal {} created for user {}", created.id, user.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch one of the caller's goals
#[utoipa::path(
    get,
    path = "/api/goals/{goal_id}",
    tag = "goals",
    params(("goal_id" = Uuid, Path, description = "Goal ID")),
    responses(
        (status = 200, description = "Goal retrieved", body = model::entities::goal::Model),
        (status = 404, description = "Goal not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_goal(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(goal_id): Path<Uuid>,
) -> ApiResult<Json<goal::Model>> {
    let goal = find_owned_goal(&state, goal_id, user.id).await?;
    Ok(Json(goal))
}

/// Update one of the caller's goals
#[utoipa::path(
    put,
    path = "/api/goals/{goal_id}",
    tag = "goals",
    params(("goal_id" = Uuid, Path, description = "Goal ID")),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Goal updated", body = model::entities::goal::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Goal not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_goal(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(goal_id): Path<Uuid>,
    Json(request): Json<UpdateGoalRequest>,
) -> ApiResult<Json<goal::Model>> {
    request.validate()?;

    let existing = find_owned_goal(&state, goal_id, user.id).await?;
    let mut active: goal::ActiveModel = existing.into();

    if let Some(title) = request.title {
        active.title = Set(title);
    }
    if let Some(description) = request.description {
        active.description = Set(Some(description));
    }
    if let Some(kind) = request.kind {
        active.kind = Set(kind);
    }
    if let Some(specific) = request.specific {
        active.specific = Set(Some(specific));
    }
    if let Some(measurable) = request.measurable {
        active.measurable = Set(Some(measurable));
    }
    if let Some(achievable) = request.achievable {
        active.achievable = Set(Some(achievable));
    }
    if let Some(relevant) = request.relevant {
        active.relevant = Set(Some(relevant));
    }
    if let Some(time_bound) = request.time_bound {
        active.time_bound = Set(Some(time_bound));
    }
    if let Some(progress) = request.progress {
        active.progress = Set(progress);
    }
    if let Some(status) = request.status {
        active.status = Set(status);
    }
    if let Some(target_date) = request.target_date {
        active.target_date = Set(Some(target_date));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete one of the caller's goals
#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}",
    tag = "goals",
    params(("goal_id" = Uuid, Path, description = "Goal ID")),
    responses(
        (status = 200, description = "Goal deleted", body = crate::schemas::MessageResponse),
        (status = 404, description = "Goal not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_goal(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(goal_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = goal::Entity::delete_many()
        .filter(goal::Column::Id.eq(goal_id))
        .filter(goal::Column::UserId.eq(user.id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Goal not found".to_string()));
    }

    info!("Goal {} deleted by user {}", goal_id, user.id);
    Ok(Json(MessageResponse {
        message: "Goal deleted".to_string(),
    }))
}
