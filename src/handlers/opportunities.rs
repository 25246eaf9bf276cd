use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use model::StringList;
use model::entities::{opportunity, saved_opportunity, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::{AdminUser, CurrentUser};
use crate::auth::session::resolve_session;
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Request body for creating an opportunity
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunityRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: opportunity::OpportunityKind,
    pub industry: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub application_url: Option<String>,
    pub deadline: Option<chrono::DateTime<Utc>>,
    /// Defaults to active
    pub is_active: Option<bool>,
}

/// Request body for updating an opportunity
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpportunityRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<opportunity::OpportunityKind>,
    pub industry: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub application_url: Option<String>,
    pub deadline: Option<chrono::DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct OpportunityListQuery {
    /// Filter by kind (internship or job)
    #[serde(rename = "type")]
    pub kind: Option<opportunity::OpportunityKind>,
    /// Filter by industry
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LatestOpportunitiesQuery {
    /// Maximum number of opportunities to return (default 6)
    pub limit: Option<u64>,
}

/// Whether the caller has bookmarked an opportunity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedCheckResponse {
    pub is_saved: bool,
}

/// List opportunities, optionally filtered by kind and industry.
/// Inactive rows are only visible to admins.
#[utoipa::path(
    get,
    path = "/api/opportunities",
    tag = "opportunities",
    params(OpportunityListQuery),
    responses(
        (status = 200, description = "Opportunities retrieved", body = Vec<model::entities::opportunity::Model>)
    )
)]
#[instrument(skip_all)]
pub async fn get_opportunities(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<OpportunityListQuery>,
) -> ApiResult<Json<Vec<opportunity::Model>>> {
    // The session is resolved by hand instead of through an optional
    // extractor: a lookup failure must surface as a 500, not as the
    // anonymous view.
    let viewer = resolve_session(&state.db, &jar).await?;
    let is_admin = viewer.is_some_and(|u| u.role == user::Role::Admin);

    let mut select = opportunity::Entity::find().order_by_desc(opportunity::Column::CreatedAt);
    if !is_admin {
        select = select.filter(opportunity::Column::IsActive.eq(true));
    }
    if let Some(kind) = query.kind {
        select = select.filter(opportunity::Column::Kind.eq(kind));
    }
    if let Some(industry) = query.industry {
        select = select.filter(opportunity::Column::Industry.eq(industry));
    }

    let opportunities = select.all(&state.db).await?;
    Ok(Json(opportunities))
}

/// List the most recently posted active opportunities
#[utoipa::path(
    get,
    path = "/api/opportunities/latest",
    tag = "opportunities",
    params(LatestOpportunitiesQuery),
    responses(
        (status = 200, description = "Latest opportunities retrieved", body = Vec<model::entities::opportunity::Model>)
    )
)]
#[instrument(skip_all)]
pub async fn get_latest_opportunities(
    State(state): State<AppState>,
    Query(query): Query<LatestOpportunitiesQuery>,
) -> ApiResult<Json<Vec<opportunity::Model>>> {
    let latest = opportunity::Entity::find()
        .filter(opportunity::Column::IsActive.eq(true))
        .order_by_desc(opportunity::Column::CreatedAt)
        .limit(query.limit.unwrap_or(6))
        .all(&state.db)
        .await?;
    Ok(Json(latest))
}

/// List the caller's bookmarked opportunities
#[utoipa::path(
    get,
    path = "/api/opportunities/saved",
    tag = "opportunities",
    responses(
        (status = 200, description = "Saved opportunities retrieved", body = Vec<model::entities::opportunity::Model>),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_saved_opportunities(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<opportunity::Model>>> {
    let saved = saved_opportunity::Entity::find()
        .filter(saved_opportunity::Column::UserId.eq(user.id))
        .find_also_related(opportunity::Entity)
        .all(&state.db)
        .await?;

    let opportunities = saved
        .into_iter()
        .filter_map(|(_, opportunity)| opportunity)
        .collect();
    Ok(Json(opportunities))
}

/// Fetch an opportunity by id
#[utoipa::path(
    get,
    path = "/api/opportunities/{opportunity_id}",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    responses(
        (status = 200, description = "Opportunity retrieved", body = model::entities::opportunity::Model),
        (status = 404, description = "Opportunity not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_opportunity(
    State(state): State<AppState>,
    Path(opportunity_id): Path<Uuid>,
) -> ApiResult<Json<opportunity::Model>> {
    let opportunity = opportunity::Entity::find_by_id(opportunity_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Opportunity not found".to_string()))?;
    Ok(Json(opportunity))
}

/// Create an opportunity (admin only)
#[utoipa::path(
    post,
    path = "/api/opportunities",
    tag = "opportunities",
    request_body = CreateOpportunityRequest,
    responses(
        (status = 201, description = "Opportunity created", body = model::entities::opportunity::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_opportunity(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateOpportunityRequest>,
) -> ApiResult<(StatusCode, Json<opportunity::Model>)> {
    request.validate()?;

    let new_opportunity = opportunity::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        company: Set(request.company),
        description: Set(request.description),
        location: Set(request.location),
        kind: Set(request.kind),
        industry: Set(request.industry),
        required_skills: Set(request.required_skills.map(StringList::from)),
        application_url: Set(request.application_url),
        deadline: Set(request.deadline),
        is_active: Set(request.is_active.unwrap_or(true)),
        created_at: Set(Utc::now()),
    };
    let created = new_opportunity.insert(&state.db).await?;

    info!("Opportunity {} created by admin {}", created.id, admin.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an opportunity (admin only)
#[utoipa::path(
    put,
    path = "/api/opportunities/{opportunity_id}",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    request_body = UpdateOpportunityRequest,
    responses(
        (status = 200, description = "Opportunity updated", body = model::entities::opportunity::Model),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Opportunity not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_opportunity(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(opportunity_id): Path<Uuid>,
    Json(request): Json<UpdateOpportunityRequest>,
) -> ApiResult<Json<opportunity::Model>> {
    let existing = opportunity::Entity::find_by_id(opportunity_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Opportunity not found".to_string()))?;
    let mut active: opportunity::ActiveModel = existing.into();

    if let Some(title) = request.title {
        active.title = Set(title);
    }
    if let Some(company) = request.company {
        active.company = Set(company);
    }
    if let Some(description) = request.description {
        active.description = Set(description);
    }
    if let Some(location) = request.location {
        active.location = Set(Some(location));
    }
    if let Some(kind) = request.kind {
        active.kind = Set(kind);
    }
    if let Some(industry) = request.industry {
        active.industry = Set(Some(industry));
    }
    if let Some(required_skills) = request.required_skills {
        active.required_skills = Set(Some(StringList::from(required_skills)));
    }
    if let Some(application_url) = request.application_url {
        active.application_url = Set(Some(application_url));
    }
    if let Some(deadline) = request.deadline {
        active.deadline = Set(Some(deadline));
    }
    if let Some(is_active) = request.is_active {
        active.is_active = Set(is_active);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete an opportunity (admin only)
#[utoipa::path(
    delete,
    path = "/api/opportunities/{opportunity_id}",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    responses(
        (status = 200, description = "Opportunity deleted", body = crate::schemas::MessageResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Opportunity not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_opportunity(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(opportunity_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = opportunity::Entity::delete_by_id(opportunity_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Opportunity not found".to_string()));
    }

    info!("Opportunity {} deleted by admin {}", opportunity_id, admin.id);
    Ok(Json(MessageResponse {
        message: "Opportunity deleted".to_string(),
    }))
}

/// Bookmark an opportunity for the caller
#[utoipa::path(
    post,
    path = "/api/opportunities/{opportunity_id}/save",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    responses(
        (status = 201, description = "Opportunity saved", body = model::entities::saved_opportunity::Model),
        (status = 404, description = "Opportunity not found", body = crate::schemas::ErrorResponse),
        (status = 409, description = "Already saved", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn save_opportunity(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(opportunity_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<saved_opportunity::Model>)> {
    let exists = opportunity::Entity::find_by_id(opportunity_id)
        .one(&state.db)
        .await?
        .is_some();
    if !exists {
        return Err(ApiError::NotFound("Opportunity not found".to_string()));
    }

    let already_saved = saved_opportunity::Entity::find()
        .filter(saved_opportunity::Column::UserId.eq(user.id))
        .filter(saved_opportunity::Column::OpportunityId.eq(opportunity_id))
        .one(&state.db)
        .await?
        .is_some();
    if already_saved {
        return Err(ApiError::Conflict("Opportunity already saved".to_string()));
    }

    let bookmark = saved_opportunity::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        opportunity_id: Set(opportunity_id),
        saved_at: Set(Utc::now()),
    };
    let created = bookmark.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove the caller's bookmark on an opportunity
#[utoipa::path(
    delete,
    path = "/api/opportunities/{opportunity_id}/save",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    responses(
        (status = 200, description = "Bookmark removed", body = crate::schemas::MessageResponse),
        (status = 404, description = "Bookmark not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn unsave_opportunity(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(opportunity_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = saved_opportunity::Entity::delete_many()
        .filter(saved_opportunity::Column::UserId.eq(user.id))
        .filter(saved_opportunity::Column::OpportunityId.eq(opportunity_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Saved opportunity not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Opportunity unsaved".to_string(),
    }))
}

/// Check whether the caller has bookmarked an opportunity
#[utoipa::path(
    get,
    path = "/api/opportunities/{opportunity_id}/save/check",
    tag = "opportunities",
    params(("opportunity_id" = Uuid, Path, description = "Opportunity ID")),
    responses(
        (status = 200, description = "Bookmark state", body = SavedCheckResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn check_saved_opportunity(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(opportunity_id): Path<Uuid>,
) -> ApiResult<Json<SavedCheckResponse>> {
    let is_saved = saved_opportunity::Entity::find()
        .filter(saved_opportunity::Column::UserId.eq(user.id))
        .filter(saved_opportunity::Column::OpportunityId.eq(opportunity_id))
        .one(&state.db)
        .await?
        .is_some();
    Ok(Json(SavedCheckResponse { is_saved }))
}
