//! In-memory configuration store.

use serde::Serialize;

use examsched_domain::{Hall, HallAllocationResult, StudentGroup};

/// Process-wide scheduling configuration plus the most recent generated
/// result. Nothing here survives a restart.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigStore {
    pub subjects: Vec<String>,
    pub groups: Vec<StudentGroup>,
    pub days: u32,
    pub slots_per_day: u32,
    pub halls: Vec<Hall>,
    pub per_subject_limit: u32,
    pub random_seed: Option<u64>,
    #[serde(skip)]
    pub last_result: Option<HallAllocationResult>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            groups: Vec::new(),
            days: 5,
            slots_per_day: 2,
            halls: Vec::new(),
            per_subject_limit: 30,
            random_seed: None,
            last_result: None,
        }
    }
}
