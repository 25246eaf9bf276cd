use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use model::entities::academic_module;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Request body for creating an academic module record
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicModuleRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub module_name: String,
    pub grade: Option<String>,
    pub units: Option<i32>,
    pub semester: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request body for updating an academic module record
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicModuleRequest {
    pub module_name: Option<String>,
    pub grade: Option<String>,
    pub units: Option<i32>,
    pub semester: Option<String>,
    pub completed: Option<bool>,
}

/// List the caller's academic modules
#[utoipa::path(
    get,
    path = "/api/academic-modules",
    tag = "academic-modules",
    responses(
        (status = 200, description = "Academic modules retrieved", body = Vec<model::entities::academic_module::Model>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_academic_modules(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<academic_module::Model>>> {
    let modules = academic_module::Entity::find()
        .filter(academic_module::Column::UserId.eq(user.id))
        .all(&state.db)
        .await?;
    Ok(Json(modules))
}

/// Create an academic module record for the caller
#[utoipa::path(
    post,
    path = "/api/academic-modules",
    tag = "academic-modules",
    request_body = CreateAcademicModuleRequest,
    responses(
        (status = 201, description = "Academic module created", body = model::entities::academic_module::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_academic_module(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateAcademicModuleRequest>,
) -> ApiResult<(StatusCode, Json<academic_module::Model>)> {
    request.validate()?;

    let new_module = academic_module::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        module_name: Set(request.module_name),
        grade: Set(request.grade),
        units: Set(request.units),
        semester: Set(request.semester),
        completed: Set(request.completed),
    };
    let created = new_module.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update one of the caller's academic modules
#[utoipa::path(
    put,
    path = "/api/academic-modules/{module_id}",
    tag = "academic-modules",
    params(("module_id" = Uuid, Path, description = "Academic module ID")),
    request_body = UpdateAcademicModuleRequest,
    responses(
        (status = 200, description = "Academic module updated", body = model::entities::academic_module::Model),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Academic module not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_academic_module(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(module_id): Path<Uuid>,
    Json(request): Json<UpdateAcademicModuleRequest>,
) -> ApiResult<Json<academic_module::Model>> {
    // Ownership is part of the lookup, so foreign ids read as missing.
    let existing = academic_module::Entity::find()
        .filter(academic_module::Column::Id.eq(module_id))
        .filter(academic_module::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Academic module not found".to_string()))?;
    let mut active: academic_module::ActiveModel = existing.into();

    if let Some(module_name) = request.module_name {
        active.module_name = Set(module_name);
    }
    if let Some(grade) = request.grade {
        active.grade = Set(Some(grade));
    }
    if let Some(units) = request.units {
        active.units = Set(Some(units));
    }
    if let Some(semester) = request.semester {
        active.semester = Set(Some(semester));
    }
    if let Some(completed) = request.completed {
        active.completed = Set(completed);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete one of the caller's academic modules
#[utoipa::path(
    delete,
    path = "/api/academic-modules/{module_id}",
    tag = "academic-modules",
    params(("module_id" = Uuid, Path, description = "Academic module ID")),
    responses(
        (status = 200, description = "Academic module deleted", body = crate::schemas::MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Academic module not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_academic_module(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(module_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = academic_module::Entity::delete_many()
        .filter(academic_module::Column::Id.eq(module_id))
        .filter(academic_module::Column::UserId.eq(user.id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Academic module not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Academic module deleted".to_string(),
    }))
}
