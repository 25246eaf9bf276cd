use axum::extract::State;
use axum::response::Json;
use common::RankingResponse;
use compute::student_ranking;
use model::entities::user::Role;
use model::entities::{goal, profile, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::instrument;

use crate::auth::extract::CurrentUser;
use crate::error::ApiResult;
use crate::schemas::AppState;

/// Student leaderboard ranked by composite score.
///
/// Includes the caller's own entry when they appear on the board.
#[utoipa::path(
    get,
    path = "/api/students/ranking",
    tag = "students",
    responses(
        (status = 200, description = "Ranking retrieved", body = common::RankingResponse),
        (status = 401, description = "Not authenticated", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn get_student_ranking(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<RankingResponse>> {
    let students = user::Entity::find()
        .filter(user::Column::Role.eq(Role::Student))
        .all(&state.db)
        .await?;
    let profiles = profile::Entity::find().all(&state.db).await?;
    let goals = goal::Entity::find().all(&state.db).await?;

    Ok(Json(student_ranking(&students, &profiles, &goals, user.id)))
}
