use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use compute::recommend_careers;
use model::StringList;
use model::entities::{career, profile};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::{AdminUser, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Number of entries returned by the recommendation endpoint.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Request body for creating a career
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareerRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub overview: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub recommended_tools: Option<Vec<String>>,
    pub salary_range: Option<String>,
    pub industry: Option<String>,
    /// Nested phase -> items structure, free-form JSON
    #[schema(value_type = Object)]
    pub learning_path: Option<serde_json::Value>,
    pub icon: Option<String>,
}

/// Request body for updating a career
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCareerRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub recommended_tools: Option<Vec<String>>,
    pub salary_range: Option<String>,
    pub industry: Option<String>,
    #[schema(value_type = Object)]
    pub learning_path: Option<serde_json::Value>,
    pub icon: Option<String>,
}

/// List the career catalog
#[utoipa::path(
    get,
    path = "/api/careers",
    tag = "careers",
    responses(
        (status = 200, description = "Careers retrieved", body = Vec<model::entities::career::Model>)
    )
)]
#[instrument(skip_all)]
pub async fn get_careers(State(state): State<AppState>) -> ApiResult<Json<Vec<career::Model>>> {
    let careers = career::Entity::find()
        .order_by_asc(career::Column::Title)
        .all(&state.db)
        .await?;
    Ok(Json(careers))
}

/// Recommend careers for the caller by skill overlap
#[utoipa::path(
    get,
    path = "/api/careers/recommended",
    tag = "careers",
    responses(
        (status = 200, description = "Recommended careers", body = Vec<model::entities::career::Model>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_recommended_careers(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<career::Model>>> {
    // Title order is the catalog order, so the empty-skills fallback is
    // deterministic across stores.
    let careers = career::Entity::find()
        .order_by_asc(career::Column::Title)
        .all(&state.db)
        .await?;
    let skills = profile::Entity::find()
        .filter(profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?
        .and_then(|p| p.skills)
        .map(|s| s.0)
        .unwrap_or_default();

    debug!("Recommending careers for user {} from {} skills", user.id, skills.len());
    let recommended = recommend_careers(&careers, &skills, RECOMMENDATION_LIMIT);
    Ok(Json(recommended))
}

/// Fetch a career by id
#[utoipa::path(
    get,
    path = "/api/careers/{career_id}",
    tag = "careers",
    params(("career_id" = Uuid, Path, description = "Career ID")),
    responses(
        (status = 200, description = "Career retrieved", body = model::entities::career::Model),
        (status = 404, description = "Career not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_career(
    State(state): State<AppState>,
    Path(career_id): Path<Uuid>,
) -> ApiResult<Json<career::Model>> {
    let career = career::Entity::find_by_id(career_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Career not found".to_string()))?;
    Ok(Json(career))
}

/// Create a career (admin only)
#[utoipa::path(
    post,
    path = "/api/careers",
    tag = "careers",
    request_body = CreateCareerRequest,
    responses(
        (status = 201, description = "Career created", body = model::entities::career::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_career(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateCareerRequest>,
) -> ApiResult<(StatusCode, Json<career::Model>)> {
    request.validate()?;

    let new_career = career::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        overview: Set(request.overview),
        required_skills: Set(request.required_skills.map(StringList::from)),
        recommended_tools: Set(request.recommended_tools.map(StringList::from)),
        salary_range: Set(request.salary_range),
        industry: Set(request.industry),
        learning_path: Set(request.learning_path),
        icon: Set(request.icon),
    };
    let created = new_career.insert(&state.db).await?;

    info!("Career {} created by admin {}", created.id, admin.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a career (admin only)
#[utoipa::path(
    put,
    path = "/api/careers/{career_id}",
    tag = "careers",
    params(("career_id" = Uuid, Path, description = "Career ID")),
    request_body = UpdateCareerRequest,
    responses(
        (status = 200, description = "Career updated", body = model::entities::career::Model),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Career not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_career(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(career_id): Path<Uuid>,
    Json(request): Json<UpdateCareerRequest>,
) -> ApiResult<Json<career::Model>> {
    let existing = career::Entity::find_by_id(career_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Career not found".to_string()))?;
    let mut active: career::ActiveModel = existing.into();

    if let Some(title) = request.title {
        active.title = Set(title);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(overview) = request.overview {
        active.overview = Set(Some(overview));
    }
    if let Some(required_skills) = request.required_skills {
        active.required_skills = Set(Some(StringList::from(required_skills)));
    }
    if let Some(recommended_tools) = request.recommended_tools {
        active.recommended_tools = Set(Some(StringList::from(recommended_tools)));
    }
    if let Some(salary_range) = request.salary_range {
        active.salary_range = Set(Some(salary_range));
    }
    if let Some(industry) = request.industry {
        active.industry = Set(Some(industry));
    }
    if let Some(learning_path) = request.learning_path {
        active.learning_path = Set(Some(learning_path));
    }
    if let Some(icon) = request.icon {
        active.icon = Set(Some(icon));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a career (admin only)
#[utoipa::path(
    delete,
    path = "/api/careers/{career_id}",
    tag = "careers",
    params(("career_id" = Uuid, Path, description = "Career ID")),
    responses(
        (status = 200, description = "Career deleted", body = crate::schemas::MessageResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Career not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_career(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(career_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = career::Entity::delete_by_id(career_id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Career not found".to_string()));
    }

    info!("Career {} deleted by admin {}", career_id, admin.id);
    Ok(Json(MessageResponse {
        message: "Career deleted".to_string(),
    }))
}
