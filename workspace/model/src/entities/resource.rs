use crate::types::StringList;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ResourceKind {
    #[sea_orm(string_value = "pdf")]
    #[serde(rename = "pdf")]
    Pdf,
    #[sea_orm(string_value = "video")]
    #[serde(rename = "video")]
    Video,
    #[sea_orm(string_value = "article")]
    #[serde(rename = "article")]
    Article,
    #[sea_orm(string_value = "template")]
    #[serde(rename = "template")]
    Template,
}

/// A learning resource in the global catalog.
///
/// `download_count` records intent to download: it is incremented on every
/// download request regardless of whether the client completed the transfer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "resources")]
#[schema(as = Resource)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: String,
    pub url: Option<String>,
    pub tags: Option<StringList>,
    pub download_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
