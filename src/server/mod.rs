pub mod handlers;
pub mod response;

pub use response::ErrorPayload;

use crate::{
    config::Config,
    error::{GenerateError, Result},
    generation::ImageGenerator,
    ImageService,
};
use actix_web::{http::Method, middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

/// Upper bound on a `POST /api/generate` body.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }
}

/// Registers every route; shared by [`run`] and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/generate")
            .app_data(web::PayloadConfig::new(MAX_REQUEST_BYTES))
            .route(web::post().to(handlers::generate))
            .route(web::method(Method::OPTIONS).to(handlers::generate_preflight)),
    )
    .route("/api/models", web::get().to(handlers::list_models))
    .route("/api/styles", web::get().to(handlers::list_styles))
    .route("/health", web::get().to(handlers::health));
}

pub async fn run(config: Config) -> Result<()> {
    let service = ImageService::from_config(config.backend.clone())?;
    let state = web::Data::new(AppState::new(Arc::new(service)));
    let port = config.port_or_default();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), port))
    .map_err(|e| {
        GenerateError::Config(format!("Failed to bind {}:{}: {}", config.host, port, e))
    })?
    .run()
    .await
    .map_err(|e| GenerateError::Network(format!("Server error: {}", e)))?;

    log::info!("👋 Server stopped");
    Ok(())
}
