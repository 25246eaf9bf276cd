use crate::types::StringList;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A career pathway in the global catalog. Admin-managed; not owned by any user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "careers")]
#[schema(as = Career)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub overview: Option<String>,
    pub required_skills: Option<StringList>,
    pub recommended_tools: Option<StringList>,
    pub salary_range: Option<String>,
    pub industry: Option<String>,
    /// Nested phase -> items structure, free-form JSON.
    #[sea_orm(column_type = "Json", nullable)]
    #[schema(value_type = Object)]
    pub learning_path: Option<Json>,
    pub icon: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
