use actix_web::{middleware::Logger, web, App, HttpServer};
use checklist_templates::config::EnvConfig;
use checklist_templates::db;
use checklist_templates::routes::configure_routes;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = config.bind_addr();

    let store = db::connect(&config).await.map_err(io::Error::other)?;

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
