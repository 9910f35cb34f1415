//! Domain types for the exam scheduling service.

pub mod errors;
pub mod schemas;

use serde::{Deserialize, Serialize};

pub use errors::*;
pub use schemas::*;

/// A group of students enrolled in a common set of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub name: String,
    pub subjects: Vec<String>,
    pub size: u32,
}

/// Configuration for timetable generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableConfig {
    pub days: u32,
    pub slots_per_day: u32,
    pub subjects: Vec<String>,
    pub groups: Vec<StudentGroup>,
    pub random_seed: Option<u64>,
}

impl TimetableConfig {
    pub fn total_slots(&self) -> u32 {
        self.days * self.slots_per_day
    }
}

/// A (day, slot) cell of the timetable grid. 0-indexed internally;
/// the API boundary renders both fields 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: u32,
    pub slot: u32,
}

/// One scheduled exam: a subject pinned to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSlot {
    pub day: u32,
    pub slot: u32,
    pub subject: String,
}

/// A complete conflict-free timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableResult {
    pub days: u32,
    pub slots_per_day: u32,
    pub assignments: Vec<ExamSlot>,
}

impl TimetableResult {
    /// Subjects scheduled in a given (day, slot), in assignment order.
    pub fn subjects_in_slot(&self, day: u32, slot: u32) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.day == day && a.slot == slot)
            .map(|a| a.subject.as_str())
            .collect()
    }
}

/// An examination hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    pub name: String,
    pub capacity: u32,
}

/// Configuration for hall allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallConfig {
    pub halls: Vec<Hall>,
    pub per_subject_limit: u32,
}

impl HallConfig {
    pub fn total_capacity(&self) -> u32 {
        self.halls.iter().map(|h| h.capacity).sum()
    }
}

/// Seats in one hall given to one subject. Never recorded with zero students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub subject: String,
    pub students: u32,
}

/// Students seated in one hall for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallAssignment {
    pub hall: String,
    pub day: u32,
    pub slot: u32,
    pub allocations: Vec<Allocation>,
}

impl HallAssignment {
    pub fn seats_used(&self) -> u32 {
        self.allocations.iter().map(|a| a.students).sum()
    }
}

/// Result of packing a full timetable into halls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallAllocationResult {
    pub timetable: TimetableResult,
    pub assignments: Vec<HallAssignment>,
}
