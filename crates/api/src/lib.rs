//! Exam scheduling service library.

pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use examsched_config::AppConfig;

use handlers::groups::{add_group, delete_group};
use handlers::schedule::{download_csv, generate};
use handlers::system_config::{get_config, get_subjects, store_config};
use store::ConfigStore;

/// Application state shared across handlers.
pub struct AppState {
    /// Scheduling configuration plus the most recent result. Last writer
    /// wins; readers observe some prior committed write.
    pub store: RwLock<ConfigStore>,
    pub config: AppConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: RwLock::new(ConfigStore::default()),
            config,
            start_time: Instant::now(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/health", get(health))
        .route("/api/config", post(store_config).get(get_config))
        .route("/api/subjects", get(get_subjects))
        .route("/api/groups", post(add_group))
        .route("/api/groups/{name}", delete(delete_group))
        .route("/api/generate", post(generate))
        .route("/api/export/csv", get(download_csv))
        .fallback_service(ServeDir::new(static_dir))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
