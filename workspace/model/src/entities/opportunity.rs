use crate::types::StringList;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OpportunityKind {
    #[sea_orm(string_value = "internship")]
    #[serde(rename = "internship")]
    Internship,
    #[sea_orm(string_value = "job")]
    #[serde(rename = "job")]
    Job,
}

/// An internship or job posting in the global catalog.
///
/// `is_active` is a soft-delete flag: inactive rows stay queryable by id and
/// by admins but disappear from public listings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "opportunities")]
#[schema(as = Opportunity)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub industry: Option<String>,
    pub required_skills: Option<StringList>,
    pub application_url: Option<String>,
    pub deadline: Option<DateTimeUtc>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::saved_opportunity::Entity")]
    SavedOpportunity,
}

impl Related<super::saved_opportunity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedOpportunity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
