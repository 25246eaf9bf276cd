use crate::schemas::AppState;
use anyhow::Result;
use sea_orm::Database;

/// Runtime configuration resolved from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Mark session cookies `Secure`. Enable when serving over TLS.
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { cookie_secure }
    }
}

/// Initialize application state for a specific database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    dotenvy::dotenv().ok();
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState {
        db,
        config: AppConfig::from_env(),
    })
}
