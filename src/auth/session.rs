use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use model::entities::{session, user};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set};
use tracing::debug;
use uuid::Uuid;

/// Name of the session cookie. The cookie value is the opaque session id.
pub const SESSION_COOKIE: &str = "waypoint_session";

/// Sessions live for seven days; expiry is enforced server-side on every
/// lookup, so a stale cookie is as good as no cookie.
const SESSION_TTL_DAYS: i64 = 7;

/// Creates a session row for the given user.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<session::Model, DbErr> {
    let now = Utc::now();
    let row = session::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        expires_at: Set(now + Duration::days(SESSION_TTL_DAYS)),
        created_at: Set(now),
    };
    row.insert(db).await
}

/// Builds the session cookie carrying `session_id`. The cookie's `Max-Age`
/// mirrors the session row's lifetime.
pub fn session_cookie(session_id: Uuid, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session_id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.set_max_age(time::Duration::days(SESSION_TTL_DAYS));
    cookie
}

/// Builds an expired cookie that clears the session on the client.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// Resolves the cookie jar to the logged-in user, if any.
///
/// Missing cookies, unparseable session ids, unknown sessions and expired
/// sessions all resolve to `None`. Expired rows are deleted on sight.
pub async fn resolve_session(
    db: &DatabaseConnection,
    jar: &CookieJar,
) -> Result<Option<user::Model>, DbErr> {
    let Some(raw) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(session_id) = Uuid::parse_str(raw.value()) else {
        debug!("Session cookie with malformed id");
        return Ok(None);
    };
    let Some(session) = session::Entity::find_by_id(session_id).one(db).await? else {
        return Ok(None);
    };
    if session.expires_at < Utc::now() {
        debug!("Session {} expired, removing", session.id);
        session.delete(db).await?;
        return Ok(None);
    }
    user::Entity::find_by_id(session.user_id).one(db).await
}

/// Deletes the session row referenced by the jar, if present and valid.
pub async fn destroy_session(db: &DatabaseConnection, jar: &CookieJar) -> Result<(), DbErr> {
    let Some(raw) = jar.get(SESSION_COOKIE) else {
        return Ok(());
    };
    let Ok(session_id) = Uuid::parse_str(raw.value()) else {
        return Ok(());
    };
    session::Entity::delete_by_id(session_id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_scope_and_lifetime() {
        let cookie = session_cookie(Uuid::new_v4(), true);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::days(SESSION_TTL_DAYS))
        );
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
