use chrono::{DateTime, Utc};
use entity::template::{Model as TemplateModel, TemplateData};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RTemplateCreate {
    pub data: TemplateData,
}

impl RTemplateCreate {
    /// Presence and enum checks happen during deserialization; this covers the rest.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.data.name.trim().is_empty() {
            return Err(AppError::Validation("data.name must not be blank".into()));
        }

        if let Some(checklist) = &self.data.checklist {
            if checklist.description.trim().is_empty() {
                return Err(AppError::Validation(
                    "data.checklist.description must not be blank".into(),
                ));
            }
        }

        if let Some(pos) = self
            .data
            .items
            .iter()
            .position(|item| item.description.trim().is_empty())
        {
            return Err(AppError::Validation(format!(
                "data.items[{pos}].description must not be blank"
            )));
        }

        Ok(())
    }
}

/// Body accepted by the update route. None of these are template fields.
#[derive(Serialize, Deserialize, Debug, Default, Clone, ToSchema)]
pub struct RTemplateUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

impl RTemplateUpdate {
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.age.is_some() {
            fields.push("age");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        fields
    }
}

/// Query parameters of the list route. Accepted, never applied.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RTemplateListQuery {
    /// filter data
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub fields: Option<String>,
    /// limit returned resource
    pub page_offset: Option<String>,
    /// limit returned resource
    pub page_limit: Option<String>,
}

impl RTemplateListQuery {
    /// Folds raw query pairs into the documented parameters. Repeated keys keep
    /// the last value; unknown keys are dropped.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut query = RTemplateListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "filter" => &mut query.filter,
                "sort" => &mut query.sort,
                "fields" => &mut query.fields,
                "page_offset" => &mut query.page_offset,
                "page_limit" => &mut query.page_limit,
                _ => continue,
            };
            *slot = Some(value.clone());
        }
        query
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TemplateRes {
    pub id: Uuid,
    pub data: TemplateData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TemplateModel> for TemplateRes {
    fn from(model: TemplateModel) -> Self {
        TemplateRes {
            id: model.id,
            data: model.data,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Update acknowledgement, keyed like a document-store driver result (`matchedCount`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdateRes {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Uuid>,
    pub upserted_count: u64,
}

impl TemplateUpdateRes {
    /// Summary of an update that matched `matched_count` documents and changed none of them.
    pub fn unmodified(matched_count: u64) -> Self {
        TemplateUpdateRes {
            acknowledged: true,
            matched_count,
            modified_count: 0,
            upserted_id: None,
            upserted_count: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDeleteRes {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl TemplateDeleteRes {
    pub fn new(deleted_count: u64) -> Self {
        TemplateDeleteRes { acknowledged: true, deleted_count }
    }
}
