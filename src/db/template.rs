use crate::db::postgres_service::PostgresService;
use crate::db::store::TemplateStore;
use crate::types::error::AppError;
use crate::types::template::{RTemplateUpdate, TemplateDeleteRes, TemplateUpdateRes};
use async_trait::async_trait;
use chrono::Utc;
use entity::template::{ActiveModel as TemplateActive, Column, Entity as Template, Model as TemplateModel, TemplateData};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

#[async_trait]
impl TemplateStore for PostgresService {
    async fn create_template(&self, data: TemplateData) -> Result<TemplateModel, AppError> {
        let now = Utc::now();
        Ok(TemplateActive {
            id: Set(Uuid::new_v4()),
            data: Set(data),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    async fn list_templates(&self) -> Result<Vec<TemplateModel>, AppError> {
        Ok(Template::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateModel>, AppError> {
        Ok(Template::find_by_id(id).one(&self.database_connection).await?)
    }

    async fn update_template(
        &self,
        id: Uuid,
        _patch: RTemplateUpdate,
    ) -> Result<TemplateUpdateRes, AppError> {
        // no column matches the patch fields; only the match is observable
        let matched = Template::find_by_id(id).count(&self.database_connection).await?;
        Ok(TemplateUpdateRes::unmodified(matched))
    }

    async fn delete_template(&self, id: Uuid) -> Result<TemplateDeleteRes, AppError> {
        let res = Template::delete_by_id(id).exec(&self.database_connection).await?;
        Ok(TemplateDeleteRes::new(res.rows_affected))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(self.database_connection.ping().await?)
    }
}
