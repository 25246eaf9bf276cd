use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use model::StringList;
use model::entities::training_program;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Request body for creating a training program
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingProgramRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub duration: Option<String>,
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub certification_offered: bool,
    pub url: Option<String>,
    /// Defaults to active
    pub is_active: Option<bool>,
}

/// Request body for updating a training program
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingProgramRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub duration: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certification_offered: Option<bool>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}

/// List active training programs
#[utoipa::path(
    get,
    path = "/api/training-programs",
    tag = "training-programs",
    responses(
        (status = 200, description = "Training programs retrieved", body = Vec<model::entities::training_program::Model>)
    )
)]
#[instrument(skip_all)]
pub async fn get_training_programs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<training_program::Model>>> {
    let programs = training_program::Entity::find()
        .filter(training_program::Column::IsActive.eq(true))
        .all(&state.db)
        .await?;
    Ok(Json(programs))
}

/// Fetch a training program by id
#[utoipa::path(
    get,
    path = "/api/training-programs/{program_id}",
    tag = "training-programs",
    params(("program_id" = Uuid, Path, description = "Training program ID")),
    responses(
        (status = 200, description = "Training program retrieved", body = model::entities::training_program::Model),
        (status = 404, description = "Training program not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_training_program(
    State(state): State<AppState>,
    Path(program_id): Path<Uuid>,
) -> ApiResult<Json<training_program::Model>> {
    let program = training_program::Entity::find_by_id(program_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Training program not found".to_string()))?;
    Ok(Json(program))
}

/// Create a training program (admin only)
#[utoipa::path(
    post,
    path = "/api/training-programs",
    tag = "training-programs",
    request_body = CreateTrainingProgramRequest,
    responses(
        (status = 201, description = "Training program created", body = model::entities::training_program::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_training_program(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateTrainingProgramRequest>,
) -> ApiResult<(StatusCode, Json<training_program::Model>)> {
    request.validate()?;

    let new_program = training_program::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        provider: Set(request.provider),
        duration: Set(request.duration),
        skills: Set(request.skills.map(StringList::from)),
        certification_offered: Set(request.certification_offered),
        url: Set(request.url),
        is_active: Set(request.is_active.unwrap_or(true)),
    };
    let created = new_program.insert(&state.db).await?;

    info!("Training program {} created by admin {}", created.id, admin.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a training program (admin only)
#[utoipa::path(
    put,
    path = "/api/training-programs/{program_id}",
    tag = "training-programs",
    params(("program_id" = Uuid, Path, description = "Training program ID")),
    request_body = UpdateTrainingProgramRequest,
    responses(
        (status = 200, description = "Training program updated", body = model::entities::training_program::Model),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Training program not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_training_program(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(program_id): Path<Uuid>,
    Json(request): Json<UpdateTrainingProgramRequest>,
) -> ApiResult<Json<training_program::Model>> {
    let existing = training_program::Entity::find_by_id(program_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Training program not found".to_string()))?;
    let mut active: training_program::ActiveModel = existing.into();

    if let Some(title) = request.title {
        active.title = Set(title);
    }
    if let Some(description) = request.description {
        active.description = Set(Some(description));
    }
    if let Some(provider) = request.provider {
        active.provider = Set(Some(provider));
    }
    if let Some(duration) = request.duration {
        active.duration = Set(Some(duration));
    }
    if let Some(skills) = request.skills {
        active.skills = Set(Some(StringList::from(skills)));
    }
    if let Some(certification_offered) = request.certification_offered {
        active.certification_offered = Set(certification_offered);
    }
    if let Some(url) = request.url {
        active.url = Set(Some(url));
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a training program (admin only)
#[utoipa::path(
    delete,
    path = "/api/training-programs/{program_id}",
    tag = "training-programs",
    params(("program_id" = Uuid, Path, description = "Training program ID")),
    responses(
        (status = 200, description = "Training program deleted", body = crate::schemas::MessageResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Training program not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_training_program(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(program_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = training_program::Entity::delete_by_id(program_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Training program not found".to_string()));
    }

    info!("Training program {} deleted by admin {}", program_id, admin.id);
    Ok(Json(MessageResponse {
        message: "Training program deleted".to_string(),
    }))
}
