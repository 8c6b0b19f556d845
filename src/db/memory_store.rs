use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use entity::template::{Model as TemplateModel, TemplateData};
use uuid::Uuid;

use crate::db::store::TemplateStore;
use crate::types::error::AppError;
use crate::types::template::{RTemplateUpdate, TemplateDeleteRes, TemplateUpdateRes};

/// Process-local store. Vec order is creation order.
#[derive(Default)]
pub struct MemoryStore {
    templates: RwLock<Vec<TemplateModel>>,
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("template store lock poisoned".into())
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn create_template(&self, data: TemplateData) -> Result<TemplateModel, AppError> {
        let now = Utc::now();
        let model = TemplateModel {
            id: Uuid::new_v4(),
            data,
            created_at: now,
            updated_at: now,
        };
        self.templates.write().map_err(poisoned)?.push(model.clone());
        Ok(model)
    }

    async fn list_templates(&self) -> Result<Vec<TemplateModel>, AppError> {
        Ok(self.templates.read().map_err(poisoned)?.clone())
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateModel>, AppError> {
        Ok(self
            .templates
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update_template(
        &self,
        id: Uuid,
        _patch: RTemplateUpdate,
    ) -> Result<TemplateUpdateRes, AppError> {
        let matched = self
            .templates
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|t| t.id == id)
            .count();
        Ok(TemplateUpdateRes::unmodified(matched as u64))
    }

    async fn delete_template(&self, id: Uuid) -> Result<TemplateDeleteRes, AppError> {
        let mut templates = self.templates.write().map_err(poisoned)?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        Ok(TemplateDeleteRes::new((before - templates.len()) as u64))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.templates.read().map_err(poisoned).map(|_| ())
    }
}
