use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use model::StringList;
use model::entities::resource;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, MessageResponse};

/// Request body for creating a resource
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: resource::ResourceKind,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request body for updating a resource
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<resource::ResourceKind>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResourceListQuery {
    /// Filter by kind (pdf, video, article or template)
    #[serde(rename = "type")]
    pub kind: Option<resource::ResourceKind>,
    /// Filter by category
    pub category: Option<String>,
}

/// List resources, optionally filtered by kind and category
#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "resources",
    params(ResourceListQuery),
    responses(
        (status = 200, description = "Resources retrieved", body = Vec<model::entities::resource::Model>)
    )
)]
#[instrument(skip_all)]
pub async fn get_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> ApiResult<Json<Vec<resource::Model>>> {
    let mut select = resource::Entity::find().order_by_desc(resource::Column::CreatedAt);
    if let Some(kind) = query.kind {
        select = select.filter(resource::Column::Kind.eq(kind));
    }
    if let Some(category) = query.category {
        select = select.filter(resource::Column::Category.eq(category));
    }

    let resources = select.all(&state.db).await?;
    Ok(Json(resources))
}

/// Fetch a resource by id
#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}",
    tag = "resources",
    params(("resource_id" = Uuid, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource retrieved", body = model::entities::resource::Model),
        (status = 404, description = "Resource not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
) -> ApiResult<Json<resource::Model>> {
    let resource = resource::Entity::find_by_id(resource_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Resource not found".to_string()))?;
    Ok(Json(resource))
}

/// Create a resource (admin only)
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = "resources",
    request_body = CreateResourceRequest,
    responses(
        (status = 201, description = "Resource created", body = model::entities::resource::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_resource(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateResourceRequest>,
) -> ApiResult<(StatusCode, Json<resource::Model>)> {
    request.validate()?;

    let new_resource = resource::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(request.title),
        description: Set(request.description),
        kind: Set(request.kind),
        category: Set(request.category),
        url: Set(request.url),
        tags: Set(request.tags.map(StringList::from)),
        download_count: Set(0),
        created_at: Set(Utc::now()),
    };
    let created = new_resource.insert(&state.db).await?;

    info!("Resource {} created by admin {}", created.id, admin.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a resource (admin only)
#[utoipa::path(
    put,
    path = "/api/resources/{resource_id}",
    tag = "resources",
    params(("resource_id" = Uuid, Path, description = "Resource ID")),
    request_body = UpdateResourceRequest,
    responses(
        (status = 200, description = "Resource updated", body = model::entities::resource::Model),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Resource not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_resource(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(resource_id): Path<Uuid>,
    Json(request): Json<UpdateResourceRequest>,
) -> ApiResult<Json<resource::Model>> {
    let existing = resource::Entity::find_by_id(resource_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Resource not found".to_string()))?;
    let mut active: resource::ActiveModel = existing.into();

    if let Some(title) = request.title {
        active.title = Set(title);
    }
    if let Some(description) = request.description {
        active.description = Set(Some(description));
    }
    if let Some(kind) = request.kind {
        active.kind = Set(kind);
    }
    if let Some(category) = request.category {
        active.category = Set(category);
    }
    if let Some(url) = request.url {
        active.url = Set(Some(url));
    }
    if let Some(tags) = request.tags {
        active.tags = Set(Some(StringList::from(tags)));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a resource (admin only)
#[utoipa::path(
    delete,
    path = "/api/resources/{resource_id}",
    tag = "resources",
    params(("resource_id" = Uuid, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource deleted", body = crate::schemas::MessageResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Resource not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn delete_resource(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(resource_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let result = resource::Entity::delete_by_id(resource_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Resource not found".to_string()));
    }

    info!("Resource {} deleted by admin {}", resource_id, admin.id);
    Ok(Json(MessageResponse {
        message: "Resource deleted".to_string(),
    }))
}

/// Record a download of a resource.
///
/// The counter is bumped with a single `download_count = download_count + 1`
/// update, so concurrent downloads cannot lose increments. It counts intent:
/// the increment happens whether or not the client fetches the file.
#[utoipa::path(
    post,
    path = "/api/resources/{resource_id}/download",
    tag = "resources",
    params(("resource_id" = Uuid, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Download recorded", body = model::entities::resource::Model),
        (status = 404, description = "Resource not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn download_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
) -> ApiResult<Json<resource::Model>> {
    let result = resource::Entity::update_many()
        .col_expr(
            resource::Column::DownloadCount,
            Expr::col(resource::Column::DownloadCount).add(1),
        )
        .filter(resource::Column::Id.eq(resource_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Resource not found".to_string()));
    }

    debug!("Recorded download for resource {}", resource_id);
    let resource = resource::Entity::find_by_id(resource_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Resource not found".to_string()))?;
    Ok(Json(resource))
}
