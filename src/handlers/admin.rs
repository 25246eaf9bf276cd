use axum::extract::{Path, State};
use axum::response::Json;
use common::{SkillLevel, StudentAnalyticsStats};
use compute::{latest_skill_levels, student_analytics};
use model::entities::user::Role;
use model::entities::{goal, profile, progress_record, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::extract::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::AppState;

/// The slice of account data exposed alongside a student's profile.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub name: String,
    pub email: String,
    pub year_level: Option<i32>,
    pub course: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<&user::Model> for StudentSummary {
    fn from(user: &user::Model) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            year_level: user.year_level,
            course: user.course.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// A student's profile with account details, as seen by an admin.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentProfileResponse {
    #[serde(flatten)]
    pub profile: Option<profile::Model>,
    pub user: StudentSummary,
}

/// Full analytics view for one student.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnalyticsResponse {
    pub user: StudentSummary,
    pub profile: Option<profile::Model>,
    pub goals: Vec<goal::Model>,
    pub progress_records: Vec<SkillLevel>,
    pub stats: StudentAnalyticsStats,
}

/// List all student accounts (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/students",
    tag = "admin",
    responses(
        (status = 200, description = "Students retrieved", body = Vec<model::entities::user::Model>),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_students(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<user::Model>>> {
    let students = user::Entity::find()
        .filter(user::Column::Role.eq(Role::Student))
        .all(&state.db)
        .await?;
    Ok(Json(students))
}

/// Fetch one student's profile (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/students/{student_id}/profile",
    tag = "admin",
    params(("student_id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student profile retrieved", body = StudentProfileResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Student not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_student_profile(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<Json<StudentProfileResponse>> {
    let student = find_student(&state, student_id).await?;
    let profile = profile::Entity::find()
        .filter(profile::Column::UserId.eq(student.id))
        .one(&state.db)
        .await?;

    Ok(Json(StudentProfileResponse {
        user: StudentSummary::from(&student),
        profile,
    }))
}

/// Fetch one student's analytics (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/students/{student_id}/analytics",
    tag = "admin",
    params(("student_id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student analytics retrieved", body = StudentAnalyticsResponse),
        (status = 403, description = "Admin access required", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Student not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_student_analytics(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<Json<StudentAnalyticsResponse>> {
    let student = find_student(&state, student_id).await?;
    let profile = profile::Entity::find()
        .filter(profile::Column::UserId.eq(student.id))
        .one(&state.db)
        .await?;
    let goals = goal::Entity::find()
        .filter(goal::Column::UserId.eq(student.id))
        .all(&state.db)
        .await?;
    let records = progress_record::Entity::find()
        .filter(progress_record::Column::UserId.eq(student.id))
        .all(&state.db)
        .await?;

    let skills_count = profile
        .as_ref()
        .and_then(|p| p.skills.as_ref())
        .map_or(0, |s| s.len());
    let stats = student_analytics(&goals, &records, skills_count);

    Ok(Json(StudentAnalyticsResponse {
        user: StudentSummary::from(&student),
        profile,
        goals,
        progress_records: latest_skill_levels(&records),
        stats,
    }))
}

async fn find_student(state: &AppState, student_id: Uuid) -> ApiResult<user::Model> {
    user::Entity::find()
        .filter(user::Column::Id.eq(student_id))
        .filter(user::Column::Role.eq(Role::Student))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))
}
