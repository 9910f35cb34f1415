//! Greedy hall packing with subject mixing.

use examsched_domain::{
    Allocation, Hall, HallAllocationResult, HallAssignment, HallConfig, SchedulerError,
    StudentGroup, TimetableResult,
};

use crate::validate::validate_hall_config;

/// Pack every occupied slot of a timetable into the hall fleet.
///
/// Takes ownership of the timetable; the returned result carries it
/// alongside the seating so export and responses have both.
pub fn allocate_halls(
    timetable: TimetableResult,
    groups: &[StudentGroup],
    config: &HallConfig,
) -> Result<HallAllocationResult, SchedulerError> {
    let assignments = HallAllocator::new(&timetable, groups, config).allocate()?;
    Ok(HallAllocationResult {
        timetable,
        assignments,
    })
}

/// Per-slot greedy allocator.
///
/// Slots are independent: the whole fleet is available again in every
/// slot. Within a slot, halls are walked largest-first and each hall is
/// filled with the pending subjects largest-remaining-first, capped at
/// `per_subject_limit` seats per subject. The cap is lifted when only a
/// single subject still has demand in the slot.
pub struct HallAllocator<'a> {
    timetable: &'a TimetableResult,
    groups: &'a [StudentGroup],
    config: &'a HallConfig,
}

impl<'a> HallAllocator<'a> {
    pub fn new(
        timetable: &'a TimetableResult,
        groups: &'a [StudentGroup],
        config: &'a HallConfig,
    ) -> Self {
        Self {
            timetable,
            groups,
            config,
        }
    }

    pub fn allocate(&self) -> Result<Vec<HallAssignment>, SchedulerError> {
        validate_hall_config(self.config)?;

        let mut assignments = Vec::new();
        for day in 0..self.timetable.days {
            for slot in 0..self.timetable.slots_per_day {
                assignments.extend(self.allocate_slot(day, slot)?);
            }
        }

        Ok(assignments)
    }

    fn allocate_slot(&self, day: u32, slot: u32) -> Result<Vec<HallAssignment>, SchedulerError> {
        let subjects_in_slot = self.timetable.subjects_in_slot(day, slot);
        if subjects_in_slot.is_empty() {
            return Ok(Vec::new());
        }

        // Demand per subject, in assignment order. Subjects no group
        // claims have zero demand and drop out here.
        let mut remaining: Vec<(String, u32)> = Vec::new();
        for &subject in &subjects_in_slot {
            let demand: u32 = self
                .groups
                .iter()
                .filter(|g| g.subjects.iter().any(|s| s == subject))
                .map(|g| g.size)
                .sum();
            if demand > 0 {
                remaining.push((subject.to_string(), demand));
            }
        }

        let mut halls: Vec<&Hall> = self.config.halls.iter().collect();
        halls.sort_by(|a, b| b.capacity.cmp(&a.capacity));

        let mut out = Vec::new();
        let mut hall_index = 0;

        while remaining.iter().any(|(_, count)| *count > 0) {
            let Some(hall) = halls.get(hall_index) else {
                let remaining_students: u32 = remaining.iter().map(|(_, count)| *count).sum();
                return Err(SchedulerError::InsufficientHallCapacity {
                    day,
                    slot,
                    remaining_students,
                    total_capacity: self.config.total_capacity(),
                    subjects: remaining.iter().cloned().collect(),
                });
            };

            // Pending subjects for this hall: positive remaining demand,
            // largest first, ties keep assignment order.
            let mut pending: Vec<usize> = (0..remaining.len())
                .filter(|&i| remaining[i].1 > 0)
                .collect();
            pending.sort_by(|&a, &b| remaining[b].1.cmp(&remaining[a].1));

            let mut used = 0u32;
            let mut allocations = Vec::new();

            for &i in &pending {
                if used >= hall.capacity {
                    break;
                }

                let available = hall.capacity - used;
                let count = remaining[i].1;

                let mut amount = count.min(self.config.per_subject_limit).min(available);

                // The cap applies only while other subjects still have
                // demand to mix with.
                if remaining.iter().filter(|(_, count)| *count > 0).count() == 1 {
                    amount = count.min(available);
                }

                if amount > 0 {
                    allocations.push(Allocation {
                        subject: remaining[i].0.clone(),
                        students: amount,
                    });
                    remaining[i].1 -= amount;
                    used += amount;
                }
            }

            if !allocations.is_empty() {
                out.push(HallAssignment {
                    hall: hall.name.clone(),
                    day,
                    slot,
                    allocations,
                });
            }

            hall_index += 1;
        }

        tracing::debug!(day, slot, halls_used = out.len(), "slot packed");
        Ok(out)
    }
}
