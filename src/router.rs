use crate::handlers::{
    academic_modules::{
        create_academic_module, delete_academic_module, get_academic_modules,
        update_academic_module,
    },
    admin::{get_student_analytics, get_student_profile, get_students},
    auth::{login, logout, me, register},
    careers::{
        create_career, delete_career, get_career, get_careers, get_recommended_careers,
        update_career,
    },
    dashboard::dashboard_stats,
    goals::{create_goal, delete_goal, get_goal, get_goals, get_recent_goals, update_goal},
    health::health_check,
    opportunities::{
        check_saved_opportunity, create_opportunity, delete_opportunity, get_latest_opportunities,
        get_opportunities, get_opportunity, get_saved_opportunities, save_opportunity,
        unsave_opportunity, update_opportunity,
    },
    profile::{get_profile, update_profile},
    progress::{get_skill_progress, update_skill_level},
    resources::{
        create_resource, delete_resource, download_resource, get_resource, get_resources,
        update_resource,
    },
    students::get_student_ranking,
    training_programs::{
        create_training_program, delete_training_program, get_training_program,
        get_training_programs, update_training_program,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Auth and session routes
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        // Dashboard
        .route("/api/dashboard/stats", get(dashboard_stats))
        // Profile (PUT and PATCH share the partial-update semantics)
        .route("/api/profile", get(get_profile))
        .route("/api/profile", put(update_profile).patch(update_profile))
        // Goal routes
        .route("/api/goals", get(get_goals))
        .route("/api/goals", post(create_goal))
        .route("/api/goals/recent", get(get_recent_goals))
        .route("/api/goals/:goal_id", get(get_goal))
        .route("/api/goals/:goal_id", put(update_goal))
        .route("/api/goals/:goal_id", delete(delete_goal))
        // Career catalog and recommendations
        .route("/api/careers", get(get_careers))
        .route("/api/careers", post(create_career))
        .route("/api/careers/recommended", get(get_recommended_careers))
        .route("/api/careers/:career_id", get(get_career))
        .route("/api/careers/:career_id", put(update_career))
        .route("/api/careers/:career_id", delete(delete_career))
        // Opportunity catalog and bookmarks
        .route("/api/opportunities", get(get_opportunities))
        .route("/api/opportunities", post(create_opportunity))
        .route("/api/opportunities/latest", get(get_latest_opportunities))
        .route("/api/opportunities/saved", get(get_saved_opportunities))
        .route("/api/opportunities/:opportunity_id", get(get_opportunity))
        .route("/api/opportunities/:opportunity_id", put(update_opportunity))
        .route("/api/opportunities/:opportunity_id", delete(delete_opportunity))
        .route("/api/opportunities/:opportunity_id/save", post(save_opportunity))
        .route("/api/opportunities/:opportunity_id/save", delete(unsave_opportunity))
        .route("/api/opportunities/:opportunity_id/save/check", get(check_saved_opportunity))
        // Resource catalog
        .route("/api/resources", get(get_resources))
        .route("/api/resources", post(create_resource))
        .route("/api/resources/:resource_id", get(get_resource))
        .route("/api/resources/:resource_id", put(update_resource))
        .route("/api/resources/:resource_id", delete(delete_resource))
        .route("/api/resources/:resource_id/download", post(download_resource))
        // Training program catalog
        .route("/api/training-programs", get(get_training_programs))
        .route("/api/training-programs", post(create_training_program))
        .route("/api/training-programs/:program_id", get(get_training_program))
        .route("/api/training-programs/:program_id", put(update_training_program))
        .route("/api/training-programs/:program_id", delete(delete_training_program))
        // Skill progress
        .route("/api/progress/skills", get(get_skill_progress))
        .route("/api/progress/skills/:skill_name", post(update_skill_level))
        // Academic modules
        .route("/api/academic-modules", get(get_academic_modules))
        .route("/api/academic-modules", post(create_academic_module))
        .route("/api/academic-modules/:module_id", put(update_academic_module))
        .route("/api/academic-modules/:module_id", delete(delete_academic_module))
        // Leaderboard
        .route("/api/students/ranking", get(get_student_ranking))
        // Admin views
        .route("/api/admin/students", get(get_students))
        .route("/api/admin/students/:student_id/profile", get(get_student_profile))
        .route("/api/admin/students/:student_id/analytics", get(get_student_analytics))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
