//! Student-group handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use validator::Validate;

use examsched_domain::{AddGroupRequest, SchedulerError, StudentGroup};

use crate::AppState;
use crate::error::ApiError;

/// Response for group mutations: a confirmation plus the updated list.
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub message: String,
    pub groups: Vec<StudentGroup>,
}

/// Add a student group to the stored configuration.
pub async fn add_group(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddGroupRequest>,
) -> Result<Json<GroupListResponse>, ApiError> {
    req.validate().map_err(SchedulerError::from_validation_errors)?;

    let mut store = state.store.write().await;
    if store.groups.iter().any(|g| g.name == req.name) {
        return Err(ApiError::BadRequest(format!(
            "Group '{}' already exists",
            req.name
        )));
    }

    let name = req.name.clone();
    store.groups.push(StudentGroup {
        name: req.name,
        subjects: req.subjects,
        size: req.size,
    });
    tracing::info!(group = %name, "Group added");

    Ok(Json(GroupListResponse {
        message: format!("Group '{name}' added successfully"),
        groups: store.groups.clone(),
    }))
}

/// Delete a student group by name.
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<GroupListResponse>, ApiError> {
    let mut store = state.store.write().await;
    let before = store.groups.len();
    store.groups.retain(|g| g.name != name);

    if store.groups.len() == before {
        return Err(ApiError::NotFound(format!("Group '{name}' not found")));
    }
    tracing::info!(group = %name, "Group deleted");

    Ok(Json(GroupListResponse {
        message: format!("Group '{name}' deleted successfully"),
        groups: store.groups.clone(),
    }))
}
