use actix_web::web;

use crate::types::error::AppError;

pub mod docs;
pub mod health;
pub mod root;
pub mod template;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(root::welcome);
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/templates")
            .service(template::create::create_template)
            .service(template::list::list_templates)
            .service(template::get::get_template)
            .service(template::update::update_template)
            .service(template::delete::delete_template)
    );
    cfg.service(
        web::scope("/api-doc")
            .service(docs::api_doc_page)
            .service(docs::openapi_json)
    );
}
