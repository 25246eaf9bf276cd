use crate::types::StringList;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Academic and personal profile, 1:1 with a user.
///
/// Created empty at registration and mutated through the profile endpoint;
/// it is never deleted independently of its user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "profiles")]
#[schema(as = Profile)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    /// GPA on a 4.0 scale. Stored as entered; clamped only when scored.
    pub gpa: Option<f32>,
    pub skills: Option<StringList>,
    pub interests: Option<StringList>,
    pub career_preferences: Option<StringList>,
    pub certifications: Option<StringList>,
    pub subjects_taken: Option<StringList>,
    pub resume_url: Option<String>,
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
