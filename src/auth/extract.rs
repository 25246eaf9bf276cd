use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use model::entities::user;

use crate::auth::session::resolve_session;
use crate::error::ApiError;
use crate::schemas::AppState;

/// Extractor for any authenticated user. Rejects with 401 when the request
/// carries no valid session.
pub struct CurrentUser(pub user::Model);

/// Extractor for admin-only routes. Rejects with 401 when unauthenticated
/// and 403 when the session user is not an admin.
pub struct AdminUser(pub user::Model);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user = resolve_session(&state.db, &jar)
            .await?
            .ok_or_else(|| ApiError::Auth("Not authenticated".to_string()))?;
        Ok(CurrentUser(user))
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != user::Role::Admin {
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }
        Ok(AdminUser(user))
    }
}
