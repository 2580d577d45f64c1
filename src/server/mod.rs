//! HTTP surface: `GET /`, `GET /health`, `POST /predict`.

mod error;
mod handlers;

pub use error::{ApiError, ApiResult};

use crate::config::ServerConfig;
use crate::model::ScoringModel;
use crate::risk::Scorer;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Shared, read-only request state. The model is loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ScoringModel>,
    pub scorer: Arc<Scorer>,
}

impl AppState {
    pub fn new(model: Arc<dyn ScoringModel>, scorer: Scorer) -> Self {
        Self {
            model,
            scorer: Arc::new(scorer),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    // Credentials rule out wildcard methods/headers, so mirror the request.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}
