//! CSV export of a completed schedule.

use anyhow::Context;

use examsched_domain::HallAllocationResult;

/// Render the two-section export stream: the timetable grid followed by
/// the per-hall seating, with 1-indexed day and slot labels throughout.
pub fn export_csv(result: &HallAllocationResult) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(["=== TIMETABLE ==="])?;
    writer.write_record(["Day", "Slot", "Subject"])?;
    for assignment in &result.timetable.assignments {
        writer.write_record([
            format!("Day {}", assignment.day + 1),
            format!("Slot {}", assignment.slot + 1),
            assignment.subject.clone(),
        ])?;
    }

    writer.write_record([""])?;

    writer.write_record(["=== HALL ALLOCATIONS ==="])?;
    writer.write_record(["Hall", "Day", "Slot", "Subject", "Students"])?;
    for assignment in &result.assignments {
        for allocation in &assignment.allocations {
            writer.write_record([
                assignment.hall.clone(),
                format!("Day {}", assignment.day + 1),
                format!("Slot {}", assignment.slot + 1),
                allocation.subject.clone(),
                allocation.students.to_string(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv writer: {e}"))?;
    String::from_utf8(bytes).context("csv output was not utf-8")
}
