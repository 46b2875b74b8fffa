// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{health_handler, languages_handler, metrics_handler, translate_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::provider::{LanguageDetector, TranslationProvider};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub detector: Arc<dyn LanguageDetector>,
    pub translator: Arc<dyn TranslationProvider>,
}

pub fn create_router(
    config: AppConfig,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn TranslationProvider>,
) -> Router {
    let max_body_bytes = config.server.max_body_bytes;
    let state = AppState {
        config,
        detector,
        translator,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/translate", post(translate_handler))
        .route("/languages", get(languages_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
