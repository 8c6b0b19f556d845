use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: TemplateData,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The document stored in `template.data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct TemplateData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Checklist>,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checklist {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_unit: Option<DueUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_unit: Option<DueUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DueUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}
