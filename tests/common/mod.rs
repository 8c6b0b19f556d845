use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use checklist_templates::db::memory_store::MemoryStore;
use checklist_templates::db::postgres_service::PostgresService;
use checklist_templates::db::store::SharedStore;

pub mod client;

#[allow(dead_code)]
pub struct TestContext {
    pub db: SharedStore,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            db: Arc::new(MemoryStore::default()),
        }
    }
}

#[allow(dead_code)]
pub struct PostgresContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

#[allow(dead_code)]
impl PostgresContext {
    pub async fn new() -> PostgresContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url, 5)
                .await
                .expect("Failed to initialize PostgresService")
        );

        PostgresContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use checklist_templates::types::template::RTemplateCreate;
    use serde_json::{json, Value};

    pub fn sample_template_json(name: &str) -> Value {
        json!({ "data": { "name": name } })
    }

    pub fn full_template_json(name: &str) -> Value {
        json!({
            "data": {
                "name": name,
                "checklist": {
                    "description": "Weekly office walk-through",
                    "due_interval": 1,
                    "due_unit": "week"
                },
                "items": [
                    { "description": "Check fire extinguishers", "urgency": 1, "due_interval": 2, "due_unit": "day" },
                    { "description": "Restock kitchen", "urgency": 3 }
                ]
            }
        })
    }

    pub fn full_template(name: &str) -> RTemplateCreate {
        serde_json::from_value(full_template_json(name)).expect("valid template payload")
    }
}
