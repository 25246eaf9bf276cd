use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use common::SkillLevel;
use compute::latest_skill_levels;
use model::entities::progress_record;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::CurrentUser;
use crate::error::ApiResult;
use crate::schemas::AppState;

/// Request body for recording a new skill level
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateSkillLevelRequest {
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    pub level: i32,
}

/// Current level per skill for the caller.
///
/// The progress log is append-only; this collapses it to the most recent
/// entry per skill name.
#[utoipa::path(
    get,
    path = "/api/progress/skills",
    tag = "progress",
    responses(
        (status = 200, description = "Skill levels retrieved", body = Vec<common::SkillLevel>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_skill_progress(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<SkillLevel>>> {
    let records = progress_record::Entity::find()
        .filter(progress_record::Column::UserId.eq(user.id))
        .all(&state.db)
        .await?;
    Ok(Json(latest_skill_levels(&records)))
}

/// Record a new level for a skill.
///
/// Appends a row rather than mutating history, so earlier levels stay
/// available as an audit trail.
#[utoipa::path(
    post,
    path = "/api/progress/skills/{skill_name}",
    tag = "progress",
    params(("skill_name" = String, Path, description = "Skill name")),
    request_body = UpdateSkillLevelRequest,
    responses(
        (status = 201, description = "Skill level recorded", body = model::entities::progress_record::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_skill_level(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(skill_name): Path<String>,
    Json(request): Json<UpdateSkillLevelRequest>,
) -> ApiResult<(StatusCode, Json<progress_record::Model>)> {
    request.validate()?;

    let record = progress_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        skill_name: Set(skill_name),
        level: Set(request.level),
        recorded_at: Set(Utc::now()),
    };
    let created = record.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
