use crate::types::StringList;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// An admin-managed training program in the global catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "training_programs")]
#[schema(as = TrainingProgram)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub duration: Option<String>,
    pub skills: Option<StringList>,
    pub certification_offered: bool,
    pub url: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
