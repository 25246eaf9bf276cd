use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::CookieJar;
use model::StringList;
use model::entities::{profile, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{create_session, destroy_session, removal_cookie, session_cookie};
use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, SuccessResponse};

/// Request body for registering a new student account.
///
/// There is deliberately no `role` field: registration always produces a
/// student, and an unknown `role` key in the body is ignored.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub year_level: Option<i32>,
    pub course: Option<String>,
}

/// Request body for logging in
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new student account and establish a session
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created, session established", body = model::entities::user::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all, fields(email = %request.email))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(CookieJar, Json<user::Model>)> {
    request.validate()?;

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(&request.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let new_user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(request.email),
        password: Set(hash_password(&request.password)?),
        name: Set(request.name),
        role: Set(user::Role::Student),
        year_level: Set(request.year_level),
        course: Set(Some(
            request
                .course
                .unwrap_or_else(|| "Computer Engineering".to_string()),
        )),
        avatar_url: Set(None),
    };
    let created = new_user.insert(&state.db).await?;

    // Every student starts with an empty profile.
    let empty_profile = profile::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(created.id),
        gpa: Set(None),
        skills: Set(Some(StringList::default())),
        interests: Set(Some(StringList::default())),
        career_preferences: Set(Some(StringList::default())),
        certifications: Set(Some(StringList::default())),
        subjects_taken: Set(Some(StringList::default())),
        resume_url: Set(None),
        bio: Set(None),
    };
    empty_profile.insert(&state.db).await?;

    let session = create_session(&state.db, created.id).await?;
    let jar = jar.add(session_cookie(session.id, state.config.cookie_secure));

    info!("Registered new student {}", created.id);
    Ok((jar, Json(created)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = model::entities::user::Model),
        (status = 401, description = "Invalid email or password", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<user::Model>)> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&request.email))
        .one(&state.db)
        .await?;

    // One error message for both unknown email and bad password, so a caller
    // cannot probe which accounts exist.
    let Some(user) = user else {
        return Err(ApiError::Auth("Invalid email or password".to_string()));
    };
    if !verify_password(&request.password, &user.password)? {
        return Err(ApiError::Auth("Invalid email or password".to_string()));
    }

    let session = create_session(&state.db, user.id).await?;
    let jar = jar.add(session_cookie(session.id, state.config.cookie_secure));

    info!("User {} logged in", user.id);
    Ok((jar, Json(user)))
}

/// Log out, destroying the session if one exists
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session destroyed", body = crate::schemas::SuccessResponse)
    )
)]
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
    destroy_session(&state.db, &jar).await?;
    let jar = jar.add(removal_cookie());
    Ok((jar, Json(SuccessResponse { success: true })))
}

/// Return the session-bound user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = model::entities::user::Model),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<user::Model> {
    Json(user)
}
