use std::sync::Arc;

use tracing::info;

use crate::config::EnvConfig;
use crate::db::memory_store::MemoryStore;
use crate::db::postgres_service::PostgresService;
use crate::db::store::SharedStore;
use crate::types::error::AppError;

pub mod memory_store;
pub mod postgres_service;
pub mod store;
pub mod template;

pub const MEMORY_SCHEME: &str = "memory://";

/// Builds the store named by `DATABASE_URI`.
pub async fn connect(config: &EnvConfig) -> Result<SharedStore, AppError> {
    if config.db_url.starts_with(MEMORY_SCHEME) {
        info!("Using in-memory template store; data is lost on exit.");
        return Ok(Arc::new(MemoryStore::default()));
    }

    let postgres = PostgresService::new(&config.db_url, config.db_max_connections).await?;
    Ok(Arc::new(postgres))
}
