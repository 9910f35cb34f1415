//! Structural validation of scheduling inputs.

use std::collections::BTreeSet;

use examsched_domain::{HallConfig, SchedulerError, TimetableConfig};

/// Check a timetable configuration before any search runs.
///
/// A subject count exceeding the grid is reported as the distinguished
/// `InsufficientSlots` kind; every other structural violation is collected
/// into a single `InvalidConfig` carrying the full list.
pub fn validate_config(config: &TimetableConfig) -> Result<(), SchedulerError> {
    let total_slots = config.total_slots();
    if config.subjects.len() > total_slots as usize {
        return Err(SchedulerError::InsufficientSlots {
            subjects_count: config.subjects.len(),
            total_slots,
            deficit: config.subjects.len() - total_slots as usize,
        });
    }

    let mut errors = Vec::new();

    if config.days == 0 {
        errors.push("Days must be positive".to_string());
    }
    if config.slots_per_day == 0 {
        errors.push("Slots per day must be positive".to_string());
    }
    if config.subjects.is_empty() {
        errors.push("Must have at least one subject".to_string());
    }
    if config.groups.is_empty() {
        errors.push("Must have at least one group".to_string());
    }

    let mut seen = BTreeSet::new();
    for subject in &config.subjects {
        if !seen.insert(subject.as_str()) {
            errors.push(format!("Duplicate subject '{subject}'"));
        }
    }

    for group in &config.groups {
        if group.name.is_empty() {
            errors.push("Group names must not be empty".to_string());
        }
        if group.subjects.is_empty() {
            errors.push(format!("Group '{}' must have at least one subject", group.name));
        }
        if group.size == 0 {
            errors.push(format!("Group '{}' must have positive size", group.name));
        }
    }

    // Coverage must hold in both directions: every claimed subject is
    // listed, every listed subject is claimed.
    let listed: BTreeSet<&str> = config.subjects.iter().map(String::as_str).collect();
    let claimed: BTreeSet<&str> = config
        .groups
        .iter()
        .flat_map(|g| g.subjects.iter().map(String::as_str))
        .collect();

    for subject in &claimed {
        if !listed.contains(subject) {
            errors.push(format!("Subject '{subject}' in groups but not in subject list"));
        }
    }
    for subject in &config.subjects {
        if !claimed.contains(subject.as_str()) {
            errors.push(format!("Subject '{subject}' not assigned to any group"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchedulerError::InvalidConfig { errors })
    }
}

/// Check the hall configuration before packing.
pub fn validate_hall_config(config: &HallConfig) -> Result<(), SchedulerError> {
    let mut errors = Vec::new();

    if config.halls.is_empty() {
        errors.push("Must have at least one hall".to_string());
    }
    for hall in &config.halls {
        if hall.name.is_empty() {
            errors.push("Hall names must not be empty".to_string());
        }
        if hall.capacity == 0 {
            errors.push(format!("Hall '{}' must have positive capacity", hall.name));
        }
    }
    if config.per_subject_limit == 0 {
        errors.push("Per-subject limit must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchedulerError::InvalidConfig { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examsched_domain::{Hall, StudentGroup};

    fn config(days: u32, slots_per_day: u32, subjects: &[&str], groups: Vec<StudentGroup>) -> TimetableConfig {
        TimetableConfig {
            days,
            slots_per_day,
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            groups,
            random_seed: None,
        }
    }

    fn group(name: &str, subjects: &[&str], size: u32) -> StudentGroup {
        StudentGroup {
            name: name.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            size,
        }
    }

    #[test]
    fn two_subjects_one_slot_is_an_insufficient_slots_failure() {
        let cfg = config(1, 1, &["Math", "English"], vec![group("g1", &["Math", "English"], 10)]);

        match validate_config(&cfg) {
            Err(SchedulerError::InsufficientSlots {
                subjects_count,
                total_slots,
                deficit,
            }) => {
                assert_eq!(subjects_count, 2);
                assert_eq!(total_slots, 1);
                assert_eq!(deficit, 1);
            }
            other => panic!("expected InsufficientSlots, got {other:?}"),
        }
    }

    #[test]
    fn exact_fit_passes() {
        let cfg = config(1, 2, &["Math", "English"], vec![group("g1", &["Math", "English"], 10)]);

        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn subject_claimed_by_no_group_is_rejected() {
        let cfg = config(2, 2, &["Math", "English"], vec![group("g1", &["Math"], 10)]);

        match validate_config(&cfg) {
            Err(SchedulerError::InvalidConfig { errors }) => {
                assert!(errors.iter().any(|e| e.contains("'English' not assigned to any group")));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn group_claiming_unlisted_subject_is_rejected() {
        let cfg = config(2, 2, &["Math"], vec![group("g1", &["Math", "Biology"], 10)]);

        match validate_config(&cfg) {
            Err(SchedulerError::InvalidConfig { errors }) => {
                assert!(errors.iter().any(|e| e.contains("'Biology' in groups but not in subject list")));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_subjects_and_zero_size_groups_are_rejected_together() {
        let cfg = config(
            2,
            2,
            &["Math", "Math"],
            vec![group("g1", &["Math"], 0)],
        );

        match validate_config(&cfg) {
            Err(SchedulerError::InvalidConfig { errors }) => {
                assert!(errors.iter().any(|e| e.contains("Duplicate subject 'Math'")));
                assert!(errors.iter().any(|e| e.contains("'g1' must have positive size")));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn hall_config_requires_halls_and_positive_numbers() {
        let empty = HallConfig {
            halls: vec![],
            per_subject_limit: 30,
        };
        assert!(matches!(
            validate_hall_config(&empty),
            Err(SchedulerError::InvalidConfig { .. })
        ));

        let zero_capacity = HallConfig {
            halls: vec![Hall {
                name: "A".to_string(),
                capacity: 0,
            }],
            per_subject_limit: 30,
        };
        assert!(matches!(
            validate_hall_config(&zero_capacity),
            Err(SchedulerError::InvalidConfig { .. })
        ));

        let zero_limit = HallConfig {
            halls: vec![Hall {
                name: "A".to_string(),
                capacity: 10,
            }],
            per_subject_limit: 0,
        };
        assert!(matches!(
            validate_hall_config(&zero_limit),
            Err(SchedulerError::InvalidConfig { .. })
        ));
    }
}
