use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use model::StringList;
use model::entities::{profile, progress_record};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TryIntoModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::extract::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::schemas::AppState;

/// Starting level written for each skill freshly added to the profile.
const INITIAL_SKILL_LEVEL: i32 = 25;

/// Request body for updating the caller's profile. Only present fields are
/// applied; PUT and PATCH share these semantics.
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// GPA on a 4.0 scale
    #[validate(range(min = 0.0, max = 4.0, message = "must be between 0.0 and 4.0"))]
    pub gpa: Option<f32>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub career_preferences: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub subjects_taken: Option<Vec<String>>,
    pub resume_url: Option<String>,
    pub bio: Option<String>,
}

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile retrieved", body = model::entities::profile::Model),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Profile not found", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<profile::Model>> {
    let profile = profile::Entity::find()
        .filter(profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;
    Ok(Json(profile))
}

/// Update the caller's profile.
///
/// Upserts: a missing profile row is created rather than rejected. Skills
/// newly added to the skill list get an initial progress record so they show
/// up in progress tracking immediately.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = model::entities::profile::Model),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<profile::Model>> {
    request.validate()?;

    let existing = profile::Entity::find()
        .filter(profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?;

    let previous_skills: Vec<String> = existing
        .as_ref()
        .and_then(|p| p.skills.clone())
        .map(|s| s.0)
        .unwrap_or_default();

    let mut active = match existing {
        Some(model) => profile::ActiveModel::from(model),
        None => profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            ..Default::default()
        },
    };

    if let Some(gpa) = request.gpa {
        active.gpa = Set(Some(gpa));
    }
    if let Some(skills) = &request.skills {
        active.skills = Set(Some(StringList::from(skills.clone())));
    }
    if let Some(interests) = request.interests {
        active.interests = Set(Some(StringList::from(interests)));
    }
    if let Some(career_preferences) = request.career_preferences {
        active.career_preferences = Set(Some(StringList::from(career_preferences)));
    }
    if let Some(certifications) = request.certifications {
        active.certifications = Set(Some(StringList::from(certifications)));
    }
    if let Some(subjects_taken) = request.subjects_taken {
        active.subjects_taken = Set(Some(StringList::from(subjects_taken)));
    }
    if let Some(resume_url) = request.resume_url {
        active.resume_url = Set(Some(resume_url));
    }
    if let Some(bio) = request.bio {
        active.bio = Set(Some(bio));
    }

    let updated = active.save(&state.db).await?.try_into_model()?;

    // Seed a progress record for every skill that was just added.
    if let Some(skills) = request.skills {
        let new_skills: Vec<&String> = skills
            .iter()
            .filter(|s| !previous_skills.contains(s))
            .collect();
        for skill in new_skills {
            debug!("Tracking new skill '{}' for user {}", skill, user.id);
            let record = progress_record::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                skill_name: Set(skill.clone()),
                level: Set(INITIAL_SKILL_LEVEL),
                recorded_at: Set(Utc::now()),
            };
            record.insert(&state.db).await?;
        }
    }

    Ok(Json(updated))
}
