//! Solver error types with HTTP status code mappings.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// API error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Value>,
}

/// Failures the scheduling pipeline can produce. Closed set: the engine
/// never raises anything else, and the gateway maps each kind to a status.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchedulerError {
    /// Structural precondition violated; not a solver failure.
    #[error("Invalid configuration: {}", .errors.join("; "))]
    InvalidConfig { errors: Vec<String> },

    /// More subjects than (day, slot) cells; detected before any search.
    #[error("Cannot fit {subjects_count} subjects into {total_slots} slots")]
    InsufficientSlots {
        subjects_count: usize,
        total_slots: u32,
        deficit: usize,
    },

    /// Backtracking search exhausted without a consistent assignment.
    #[error("No valid timetable found after exhaustive search")]
    NoSolution {
        subjects: usize,
        backtrack_attempts: u64,
        conflicts: BTreeMap<String, Vec<String>>,
    },

    /// A slot's demand cannot be packed into the hall fleet.
    #[error("Insufficient hall capacity for slot Day {}, Slot {}", .day + 1, .slot + 1)]
    InsufficientHallCapacity {
        day: u32,
        slot: u32,
        remaining_students: u32,
        total_capacity: u32,
        subjects: BTreeMap<String, u32>,
    },
}

impl SchedulerError {
    /// Short kind label used as the `error` field of the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            SchedulerError::InvalidConfig { .. } => "Invalid configuration",
            SchedulerError::InsufficientSlots { .. } => "Insufficient slots",
            SchedulerError::NoSolution { .. } => "No solution found",
            SchedulerError::InsufficientHallCapacity { .. } => "Insufficient hall capacity",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SchedulerError::InvalidConfig { .. } => StatusCode::BAD_REQUEST,
            SchedulerError::InsufficientSlots { .. }
            | SchedulerError::NoSolution { .. }
            | SchedulerError::InsufficientHallCapacity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Structured diagnostics carried alongside the human message.
    pub fn diagnostics(&self) -> Value {
        match self {
            SchedulerError::InvalidConfig { errors } => json!({
                "validation_errors": errors,
            }),
            SchedulerError::InsufficientSlots {
                subjects_count,
                total_slots,
                deficit,
            } => json!({
                "subjects_count": subjects_count,
                "total_slots": total_slots,
                "deficit": deficit,
            }),
            SchedulerError::NoSolution {
                subjects,
                backtrack_attempts,
                conflicts,
            } => json!({
                "subjects": subjects,
                "backtrack_attempts": backtrack_attempts,
                "conflicts": conflicts,
            }),
            SchedulerError::InsufficientHallCapacity {
                remaining_students,
                total_capacity,
                subjects,
                ..
            } => json!({
                "remaining_students": remaining_students,
                "total_capacity": total_capacity,
                "subjects": subjects,
            }),
        }
    }

    /// Create an invalid-config error from validator errors.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error
                            .message
                            .as_ref()
                            .unwrap_or(&std::borrow::Cow::Borrowed("validation failed"))
                    )
                })
            })
            .collect();

        if messages.is_empty() {
            SchedulerError::InvalidConfig {
                errors: vec!["Invalid input".to_string()],
            }
        } else {
            SchedulerError::InvalidConfig { errors: messages }
        }
    }
}

impl IntoResponse for SchedulerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(kind = self.kind(), "{self}");

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            diagnostics: Some(self.diagnostics()),
        };

        (status, Json(body)).into_response()
    }
}
