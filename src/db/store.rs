use std::sync::Arc;

use async_trait::async_trait;
use entity::template::{Model as TemplateModel, TemplateData};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::template::{RTemplateUpdate, TemplateDeleteRes, TemplateUpdateRes};

/// Persistence seam for templates. Every handler performs exactly one call.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn create_template(&self, data: TemplateData) -> Result<TemplateModel, AppError>;

    /// All templates in creation order.
    async fn list_templates(&self) -> Result<Vec<TemplateModel>, AppError>;

    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateModel>, AppError>;

    /// The patch names fields the document does not have, so nothing is written.
    async fn update_template(
        &self,
        id: Uuid,
        patch: RTemplateUpdate,
    ) -> Result<TemplateUpdateRes, AppError>;

    async fn delete_template(&self, id: Uuid) -> Result<TemplateDeleteRes, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub type SharedStore = Arc<dyn TemplateStore>;
