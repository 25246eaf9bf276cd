#[cfg(test)]
pub mod test_utils {
    use crate::auth::password::hash_password;
    use crate::config::AppConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use model::entities::user;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;
    use uuid::Uuid;

    pub const ADMIN_EMAIL: &str = "admin@test.local";
    pub const ADMIN_PASSWORD: &str = "admin-password";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        AppState {
            db,
            config: AppConfig {
                cookie_secure: false,
            },
        }
    }

    /// Insert an admin account directly. Registration can only mint students,
    /// so admin tests need this back door.
    pub async fn seed_admin(db: &DatabaseConnection) -> user::Model {
        let admin = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(ADMIN_EMAIL.to_string()),
            password: Set(hash_password(ADMIN_PASSWORD).expect("Failed to hash password")),
            name: Set("Test Admin".to_string()),
            role: Set(user::Role::Admin),
            year_level: Set(None),
            course: Set(None),
            avatar_url: Set(None),
        };
        admin.insert(db).await.expect("Failed to create admin")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> (Router, AppState) {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        let router = create_router(state.clone());
        (router, state)
    }
}
