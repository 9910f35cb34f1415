//! Generation and export handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::Response,
};
use validator::Validate;

use examsched_domain::{
    GenerateRequest, HallAllocationResponse, HallConfig, SchedulerError, TimetableConfig,
};
use examsched_engine::{allocate_halls, generate_timetable};

use crate::AppState;
use crate::error::ApiError;

/// Generate an exam timetable and pack it into halls.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<HallAllocationResponse>, ApiError> {
    req.validate().map_err(SchedulerError::from_validation_errors)?;

    let timetable_config = TimetableConfig::from(req.timetable_config);
    let hall_config = HallConfig::from(req.hall_config);

    tracing::info!(
        subjects = timetable_config.subjects.len(),
        groups = timetable_config.groups.len(),
        days = timetable_config.days,
        slots_per_day = timetable_config.slots_per_day,
        "Generating timetable"
    );
    let timetable = generate_timetable(&timetable_config)?;

    tracing::info!(halls = hall_config.halls.len(), "Allocating halls");
    let result = allocate_halls(timetable, &timetable_config.groups, &hall_config)?;

    let response = HallAllocationResponse::from(&result);

    // Keep the result around for CSV export.
    state.store.write().await.last_result = Some(result);

    Ok(Json(response))
}

/// Download the most recent schedule as CSV.
pub async fn download_csv(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let store = state.store.read().await;
    let Some(result) = store.last_result.as_ref() else {
        return Err(ApiError::NotFound(
            "No timetable generated yet. Please generate a timetable first.".to_string(),
        ));
    };

    let content = examsched_engine::export_csv(result)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=timetable_export.csv",
        )
        .body(Body::from(content))
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to build response: {e}")))
}
