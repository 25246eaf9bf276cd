use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Append-only skill progress log entry.
///
/// Each level change inserts a new row; nothing is mutated in place. The
/// current level of a skill is the most recent row for that skill name,
/// ordered by `recorded_at`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "progress_records")]
#[schema(as = ProgressRecord)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_name: String,
    /// Skill level in [0, 100].
    pub level: i32,
    pub recorded_at: DateTimeUtc,
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
