//! Configuration store handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use validator::Validate;

use examsched_domain::{ConfigRequest, Hall, SchedulerError, StudentGroup};

use crate::AppState;
use crate::error::ApiError;
use crate::store::ConfigStore;

/// Response for config-store writes: a confirmation plus the stored state.
#[derive(Debug, Serialize)]
pub struct StoreConfigResponse {
    pub message: String,
    pub config: ConfigStore,
}

/// Store a full scheduling configuration.
pub async fn store_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfigRequest>,
) -> Result<Json<StoreConfigResponse>, ApiError> {
    req.validate().map_err(SchedulerError::from_validation_errors)?;

    tracing::info!(
        subjects = req.subjects.len(),
        groups = req.groups.len(),
        halls = req.halls.len(),
        "Storing configuration"
    );

    let mut store = state.store.write().await;
    store.subjects = req.subjects;
    store.groups = req.groups.into_iter().map(StudentGroup::from).collect();
    store.days = req.days;
    store.slots_per_day = req.slots_per_day;
    store.halls = req.halls.into_iter().map(Hall::from).collect();
    store.per_subject_limit = req.per_subject_limit;
    store.random_seed = req.random_seed;

    Ok(Json(StoreConfigResponse {
        message: "Configuration stored successfully".to_string(),
        config: store.clone(),
    }))
}

/// Get the current system configuration.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigStore> {
    Json(state.store.read().await.clone())
}

/// Get the list of configured subjects.
pub async fn get_subjects(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.read().await.subjects.clone())
}
