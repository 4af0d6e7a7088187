//! HTTP boundary of the study companion: PDF bytes and content listings.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use cosmic_core::ContentRepo;
use cosmic_core::repo_factory::{ContentBackend, open_content};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentRepo>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentRepo>) -> Self {
        Self { content }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let repo = open_content(ContentBackend::Fs(config.content_root.clone()));
        Self::new(Arc::from(repo))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/pdf", get(routes::pdf))
        .route("/api/subjects", get(routes::subjects))
        .route("/api/subjects/{subject}", get(routes::documents))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
