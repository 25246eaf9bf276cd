use crate::config::AppConfig;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Runtime configuration
    pub config: AppConfig,
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Confirmation body for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Confirmation body for logout
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::me,
        crate::handlers::dashboard::dashboard_stats,
        crate::handlers::profile::get_profile,
        crate::handlers::profile::update_profile,
        crate::handlers::goals::get_goals,
        crate::handlers::goals::get_recent_goals,
        crate::handlers::goals::create_goal,
        crate::handlers::goals::get_goal,
        crate::handlers::goals::update_goal,
        crate::handlers::goals::delete_goal,
        crate::handlers::careers::get_careers,
        crate::handlers::careers::get_recommended_careers,
        crate::handlers::careers::get_career,
        crate::handlers::careers::create_career,
        crate::handlers::careers::update_career,
        crate::handlers::careers::delete_career,
        crate::handlers::opportunities::get_opportunities,
        crate::handlers::opportunities::get_latest_opportunities,
        crate::handlers::opportunities::get_saved_opportunities,
        crate::handlers::opportunities::get_opportunity,
        crate::handlers::opportunities::create_opportunity,
        crate::handlers::opportunities::update_opportunity,
        crate::handlers::opportunities::delete_opportunity,
        crate::handlers::opportunities::save_opportunity,
        crate::handlers::opportunities::unsave_opportunity,
        crate::handlers::opportunities::check_saved_opportunity,
        crate::handlers::resources::get_resources,
        crate::handlers::resources::get_resource,
        crate::handlers::resources::create_resource,
        crate::handlers::resources::update_resource,
        crate::handlers::resources::delete_resource,
        crate::handlers::resources::download_resource,
        crate::handlers::training_programs::get_training_programs,
        crate::handlers::training_programs::get_training_program,
        crate::handlers::training_programs::create_training_program,
        crate::handlers::training_programs::update_training_program,
        crate::handlers::training_programs::delete_training_program,
        crate::handlers::progress::get_skill_progress,
        crate::handlers::progress::update_skill_level,
        crate::handlers::academic_modules::get_academic_modules,
        crate::handlers::academic_modules::create_academic_module,
        crate::handlers::academic_modules::update_academic_module,
        crate::handlers::academic_modules::delete_academic_module,
        crate::handlers::students::get_student_ranking,
        crate::handlers::admin::get_students,
        crate::handlers::admin::get_student_profile,
        crate::handlers::admin::get_student_analytics,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            SuccessResponse,
            HealthResponse,
            model::StringList,
            model::entities::user::Model,
            model::entities::user::Role,
            model::entities::profile::Model,
            model::entities::goal::Model,
            model::entities::goal::GoalKind,
            model::entities::goal::GoalStatus,
            model::entities::career::Model,
            model::entities::opportunity::Model,
            model::entities::opportunity::OpportunityKind,
            model::entities::saved_opportunity::Model,
            model::entities::resource::Model,
            model::entities::resource::ResourceKind,
            model::entities::progress_record::Model,
            model::entities::academic_module::Model,
            model::entities::training_program::Model,
            common::SkillLevel,
            common::LeaderboardEntry,
            common::RankingResponse,
            common::StudentDashboardStats,
            common::AdminDashboardStats,
            common::StudentAnalyticsStats,
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::profile::UpdateProfileRequest,
            crate::handlers::goals::CreateGoalRequest,
            crate::handlers::goals::UpdateGoalRequest,
            crate::handlers::careers::CreateCareerRequest,
            crate::handlers::careers::UpdateCareerRequest,
            crate::handlers::opportunities::CreateOpportunityRequest,
            crate::handlers::opportunities::UpdateOpportunityRequest,
            crate::handlers::opportunities::SavedCheckResponse,
            crate::handlers::resources::CreateResourceRequest,
            crate::handlers::resources::UpdateResourceRequest,
            crate::handlers::training_programs::CreateTrainingProgramRequest,
            crate::handlers::training_programs::UpdateTrainingProgramRequest,
            crate::handlers::progress::UpdateSkillLevelRequest,
            crate::handlers::academic_modules::CreateAcademicModuleRequest,
            crate::handlers::academic_modules::UpdateAcademicModuleRequest,
            crate::handlers::admin::StudentProfileResponse,
            crate::handlers::admin::StudentSummary,
            crate::handlers::admin::StudentAnalyticsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and session endpoints"),
        (name = "dashboard", description = "Role-aware dashboard statistics"),
        (name = "profile", description = "Student profile endpoints"),
        (name = "goals", description = "Student goal endpoints"),
        (name = "careers", description = "Career catalog and recommendations"),
        (name = "opportunities", description = "Opportunity catalog and bookmarks"),
        (name = "resources", description = "Learning resource catalog"),
        (name = "training-programs", description = "Training program catalog"),
        (name = "progress", description = "Skill progress tracking"),
        (name = "academic-modules", description = "Academic module records"),
        (name = "students", description = "Student leaderboard"),
        (name = "admin", description = "Administrative student views"),
    ),
    info(
        title = "Waypoint API",
        description = "Student career planning API - goals, career recommendations, opportunities and progress tracking",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
