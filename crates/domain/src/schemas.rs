//! API request/response schemas.
//!
//! Request shapes carry `validator` rules; the 0-indexed solver results are
//! converted to 1-indexed response shapes at this boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    Hall, HallAllocationResult, HallConfig, StudentGroup, TimetableConfig, TimetableResult,
};

/// Student group as submitted by clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentGroupSchema {
    #[validate(length(min = 1, message = "group name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "group must claim at least one subject"))]
    pub subjects: Vec<String>,
    #[validate(range(min = 1, message = "group size must be positive"))]
    pub size: u32,
}

impl From<StudentGroupSchema> for StudentGroup {
    fn from(schema: StudentGroupSchema) -> Self {
        StudentGroup {
            name: schema.name,
            subjects: schema.subjects,
            size: schema.size,
        }
    }
}

/// Examination hall as submitted by clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HallSchema {
    #[validate(length(min = 1, message = "hall name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "hall capacity must be positive"))]
    pub capacity: u32,
}

impl From<HallSchema> for Hall {
    fn from(schema: HallSchema) -> Self {
        Hall {
            name: schema.name,
            capacity: schema.capacity,
        }
    }
}

/// Timetable half of a generate request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TimetableConfigSchema {
    #[validate(range(min = 1, message = "days must be positive"))]
    pub days: u32,
    #[validate(range(min = 1, message = "slots per day must be positive"))]
    pub slots_per_day: u32,
    #[validate(length(min = 1, message = "at least one subject is required"))]
    pub subjects: Vec<String>,
    #[validate(length(min = 1, message = "at least one group is required"), nested)]
    pub groups: Vec<StudentGroupSchema>,
    pub random_seed: Option<u64>,
}

impl From<TimetableConfigSchema> for TimetableConfig {
    fn from(schema: TimetableConfigSchema) -> Self {
        TimetableConfig {
            days: schema.days,
            slots_per_day: schema.slots_per_day,
            subjects: schema.subjects,
            groups: schema.groups.into_iter().map(StudentGroup::from).collect(),
            random_seed: schema.random_seed,
        }
    }
}

/// Hall half of a generate request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HallConfigSchema {
    #[validate(length(min = 1, message = "at least one hall is required"), nested)]
    pub halls: Vec<HallSchema>,
    #[validate(range(min = 1, message = "per-subject limit must be positive"))]
    #[serde(default = "default_per_subject_limit")]
    pub per_subject_limit: u32,
}

pub(crate) fn default_per_subject_limit() -> u32 {
    30
}

impl From<HallConfigSchema> for HallConfig {
    fn from(schema: HallConfigSchema) -> Self {
        HallConfig {
            halls: schema.halls.into_iter().map(Hall::from).collect(),
            per_subject_limit: schema.per_subject_limit,
        }
    }
}

/// Generate timetable request.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(nested)]
    pub timetable_config: TimetableConfigSchema,
    #[validate(nested)]
    pub hall_config: HallConfigSchema,
}

/// Store-configuration request. Groups may be empty initially and added
/// one at a time through the groups endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct ConfigRequest {
    #[validate(length(min = 1, message = "at least one subject is required"))]
    pub subjects: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub groups: Vec<StudentGroupSchema>,
    #[validate(range(min = 1, message = "days must be positive"))]
    pub days: u32,
    #[validate(range(min = 1, message = "slots per day must be positive"))]
    pub slots_per_day: u32,
    #[validate(length(min = 1, message = "at least one hall is required"), nested)]
    pub halls: Vec<HallSchema>,
    #[validate(range(min = 1, message = "per-subject limit must be positive"))]
    #[serde(default = "default_per_subject_limit")]
    pub per_subject_limit: u32,
    pub random_seed: Option<u64>,
}

/// Add-group request.
#[derive(Debug, Deserialize, Validate)]
pub struct AddGroupRequest {
    #[validate(length(min = 1, message = "group name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "group must claim at least one subject"))]
    pub subjects: Vec<String>,
    #[validate(range(min = 1, message = "group size must be positive"))]
    pub size: u32,
}

/// One scheduled exam, 1-indexed for clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSlotResponse {
    pub day: u32,
    pub slot: u32,
    pub subject: String,
}

/// Timetable response, 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    pub days: u32,
    pub slots_per_day: u32,
    pub assignments: Vec<ExamSlotResponse>,
}

impl From<&TimetableResult> for TimetableResponse {
    fn from(result: &TimetableResult) -> Self {
        TimetableResponse {
            days: result.days,
            slots_per_day: result.slots_per_day,
            assignments: result
                .assignments
                .iter()
                .map(|a| ExamSlotResponse {
                    day: a.day + 1,
                    slot: a.slot + 1,
                    subject: a.subject.clone(),
                })
                .collect(),
        }
    }
}

/// Seats for one subject in one hall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub subject: String,
    pub students: u32,
}

/// One hall's seating for one slot, 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallAssignmentResponse {
    pub hall: String,
    pub day: u32,
    pub slot: u32,
    pub allocations: Vec<AllocationResponse>,
}

/// Full generate response: the timetable plus its hall packing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallAllocationResponse {
    pub timetable: TimetableResponse,
    pub hall_allocations: Vec<HallAssignmentResponse>,
}

impl From<&HallAllocationResult> for HallAllocationResponse {
    fn from(result: &HallAllocationResult) -> Self {
        HallAllocationResponse {
            timetable: TimetableResponse::from(&result.timetable),
            hall_allocations: result
                .assignments
                .iter()
                .map(|a| HallAssignmentResponse {
                    hall: a.hall.clone(),
                    day: a.day + 1,
                    slot: a.slot + 1,
                    allocations: a
                        .allocations
                        .iter()
                        .map(|alloc| AllocationResponse {
                            subject: alloc.subject.clone(),
                            students: alloc.students,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
