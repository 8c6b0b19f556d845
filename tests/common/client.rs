use actix_web::{web, App};
use checklist_templates::db::store::SharedStore;
use std::sync::Arc;

pub struct TestClient {
    pub db: SharedStore,
}

impl TestClient {
    pub fn new(db: SharedStore) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(checklist_templates::routes::configure_routes)
    }
}
