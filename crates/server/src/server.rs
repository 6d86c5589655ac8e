//! Router assembly and shared state

use crate::config::ServerConfig;
use crate::upstream::UpstreamClient;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// Build the complete application router
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/api/chat", post(crate::routes::chat::chat))
        .route("/health", get(crate::routes::health::health_check))
        .with_state(state);

    if config.http.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    // Serve the built frontend when configured, with an index fallback
    if let Some(static_dir) = &config.static_dir {
        info!("serving static files from: {static_dir}");
        let index = Path::new(static_dir).join("index.html");
        router = router
            .fallback_service(ServeDir::new(static_dir).not_found_service(ServeFile::new(index)));
    }

    router.layer(TraceLayer::new_for_http())
}
