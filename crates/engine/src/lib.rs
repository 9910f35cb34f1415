//! Core scheduling engines: conflict-graph construction, configuration
//! validation, the backtracking timetable search, greedy hall packing and
//! CSV export of finished schedules.

pub mod allocator;
pub mod conflicts;
pub mod export;
pub mod scheduler;
pub mod validate;

pub use allocator::{HallAllocator, allocate_halls};
pub use conflicts::ConflictGraph;
pub use export::export_csv;
pub use scheduler::{TimetableScheduler, generate_timetable};
pub use validate::{validate_config, validate_hall_config};
