//! Backtracking timetable search with forward checking.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use examsched_domain::{ExamSlot, SchedulerError, Slot, TimetableConfig, TimetableResult};

use crate::conflicts::ConflictGraph;
use crate::validate::validate_config;

/// Generate an exam timetable for a validated configuration.
pub fn generate_timetable(config: &TimetableConfig) -> Result<TimetableResult, SchedulerError> {
    TimetableScheduler::new(config).solve()
}

/// Backtracking scheduler over subjects.
///
/// Subjects are ordered once, most-conflicted first; slot values are tried
/// in seeded-shuffle order; forward checking prunes conflicting subjects'
/// domains after each assignment. Working state lives here and dies with
/// the solve; the configuration is never mutated.
pub struct TimetableScheduler<'c> {
    config: &'c TimetableConfig,
    conflicts: ConflictGraph,
    assignment: HashMap<String, Slot>,
    domains: BTreeMap<String, BTreeSet<Slot>>,
    backtracks: u64,
    rng: StdRng,
}

impl<'c> TimetableScheduler<'c> {
    pub fn new(config: &'c TimetableConfig) -> Self {
        let conflicts = ConflictGraph::build(&config.groups);
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            conflicts,
            assignment: HashMap::new(),
            domains: BTreeMap::new(),
            backtracks: 0,
            rng,
        }
    }

    /// Run the search to completion. One exhaustive pass, no retries.
    pub fn solve(mut self) -> Result<TimetableResult, SchedulerError> {
        validate_config(self.config)?;

        let all_slots: Vec<Slot> = (0..self.config.days)
            .flat_map(|day| (0..self.config.slots_per_day).map(move |slot| Slot { day, slot }))
            .collect();
        for subject in &self.config.subjects {
            self.domains
                .insert(subject.clone(), all_slots.iter().copied().collect());
        }

        // Most-constrained-first: descending conflict degree, ties keep
        // the input subject order.
        let mut order = self.config.subjects.clone();
        order.sort_by_key(|subject| Reverse(self.conflicts.degree(subject)));

        if !self.backtrack(&order, 0) {
            return Err(SchedulerError::NoSolution {
                subjects: self.config.subjects.len(),
                backtrack_attempts: self.backtracks,
                conflicts: self.conflicts.to_adjacency_lists(&self.config.subjects),
            });
        }

        tracing::debug!(
            subjects = order.len(),
            backtracks = self.backtracks,
            "timetable search complete"
        );

        let assignments = order
            .iter()
            .map(|subject| {
                let slot = self.assignment[subject];
                ExamSlot {
                    day: slot.day,
                    slot: slot.slot,
                    subject: subject.clone(),
                }
            })
            .collect();

        Ok(TimetableResult {
            days: self.config.days,
            slots_per_day: self.config.slots_per_day,
            assignments,
        })
    }

    fn backtrack(&mut self, order: &[String], index: usize) -> bool {
        self.backtracks += 1;

        if index >= order.len() {
            return true;
        }

        let subject = &order[index];

        // Materialize the domain and randomize the value order.
        let mut candidates: Vec<Slot> = self.domains[subject].iter().copied().collect();
        candidates.shuffle(&mut self.rng);

        for slot in candidates {
            if !self.is_consistent(subject, slot) {
                continue;
            }

            self.assignment.insert(subject.clone(), slot);

            let saved = self.domains.clone();
            if self.forward_check(subject, slot) && self.backtrack(order, index + 1) {
                return true;
            }

            self.assignment.remove(subject);
            self.domains = saved;
        }

        false
    }

    /// Can `subject` sit at `slot` given the current partial assignment?
    fn is_consistent(&self, subject: &str, slot: Slot) -> bool {
        // The slot must not already hold an assigned subject.
        if self.assignment.values().any(|&assigned| assigned == slot) {
            return false;
        }

        // No group may see two of its subjects in the same slot.
        let mut subjects_in_slot: BTreeSet<&str> = BTreeSet::new();
        subjects_in_slot.insert(subject);
        for (other, &assigned) in &self.assignment {
            if assigned == slot {
                subjects_in_slot.insert(other);
            }
        }

        !self.config.groups.iter().any(|group| {
            group
                .subjects
                .iter()
                .filter(|s| subjects_in_slot.contains(s.as_str()))
                .count()
                > 1
        })
    }

    /// Remove `slot` from every unassigned conflicting subject's domain.
    /// An emptied domain fails the branch immediately.
    fn forward_check(&mut self, subject: &str, slot: Slot) -> bool {
        let Some(neighbors) = self.conflicts.neighbors(subject) else {
            return true;
        };

        for neighbor in neighbors {
            if self.assignment.contains_key(neighbor.as_str()) {
                continue;
            }
            if let Some(domain) = self.domains.get_mut(neighbor.as_str()) {
                domain.remove(&slot);
                if domain.is_empty() {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examsched_domain::StudentGroup;

    fn group(name: &str, subjects: &[&str], size: u32) -> StudentGroup {
        StudentGroup {
            name: name.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            size,
        }
    }

    fn config(
        days: u32,
        slots_per_day: u32,
        subjects: &[&str],
        groups: Vec<StudentGroup>,
        random_seed: Option<u64>,
    ) -> TimetableConfig {
        TimetableConfig {
            days,
            slots_per_day,
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            groups,
            random_seed,
        }
    }

    fn assert_valid(result: &TimetableResult, cfg: &TimetableConfig) {
        // Every subject exactly once.
        assert_eq!(result.assignments.len(), cfg.subjects.len());
        for subject in &cfg.subjects {
            assert_eq!(
                result
                    .assignments
                    .iter()
                    .filter(|a| &a.subject == subject)
                    .count(),
                1,
                "subject {subject} not assigned exactly once"
            );
        }

        // No two subjects share a cell.
        let mut seen = BTreeSet::new();
        for a in &result.assignments {
            assert!(a.day < cfg.days);
            assert!(a.slot < cfg.slots_per_day);
            assert!(
                seen.insert((a.day, a.slot)),
                "slot ({}, {}) assigned twice",
                a.day,
                a.slot
            );
        }

        // No group sees two of its subjects together.
        for g in &cfg.groups {
            let mut cells = BTreeSet::new();
            for a in result.assignments.iter().filter(|a| g.subjects.contains(&a.subject)) {
                assert!(
                    cells.insert((a.day, a.slot)),
                    "group {} has two subjects at ({}, {})",
                    g.name,
                    a.day,
                    a.slot
                );
            }
        }
    }

    #[test]
    fn two_conflicting_subjects_fill_a_two_slot_day() {
        let cfg = config(
            1,
            2,
            &["Math", "English"],
            vec![group("g1", &["Math", "English"], 10)],
            Some(7),
        );

        let result = generate_timetable(&cfg).unwrap();

        assert_valid(&result, &cfg);
    }

    #[test]
    fn three_subjects_into_two_slots_fails_before_search() {
        let cfg = config(
            1,
            2,
            &["Math", "English", "Physics"],
            vec![group("g1", &["Math", "English", "Physics"], 10)],
            None,
        );

        match generate_timetable(&cfg) {
            Err(SchedulerError::InsufficientSlots { deficit, .. }) => assert_eq!(deficit, 1),
            other => panic!("expected InsufficientSlots, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_groups_schedule_without_clashes() {
        let cfg = config(
            3,
            3,
            &["A", "B", "C", "D", "E", "F", "G"],
            vec![
                group("g1", &["A", "B", "C"], 20),
                group("g2", &["C", "D", "E"], 25),
                group("g3", &["E", "F", "G"], 15),
                group("g4", &["A", "G"], 10),
            ],
            Some(99),
        );

        let result = generate_timetable(&cfg).unwrap();

        assert_valid(&result, &cfg);
    }

    #[test]
    fn same_seed_reproduces_the_same_timetable() {
        let cfg = config(
            4,
            2,
            &["A", "B", "C", "D", "E", "F"],
            vec![
                group("g1", &["A", "B", "C"], 30),
                group("g2", &["C", "D"], 12),
                group("g3", &["D", "E", "F"], 18),
            ],
            Some(42),
        );

        let first = generate_timetable(&cfg).unwrap();
        let second = generate_timetable(&cfg).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_runs_still_produce_valid_timetables() {
        let cfg = config(
            2,
            2,
            &["A", "B", "C"],
            vec![group("g1", &["A", "B"], 10), group("g2", &["B", "C"], 10)],
            None,
        );

        let result = generate_timetable(&cfg).unwrap();

        assert_valid(&result, &cfg);
    }

    #[test]
    fn dense_conflicts_still_fit_when_slots_allow() {
        // Five pairwise-conflicting subjects need five distinct cells.
        let cfg = config(
            5,
            1,
            &["A", "B", "C", "D", "E"],
            vec![group("everyone", &["A", "B", "C", "D", "E"], 40)],
            Some(3),
        );

        let result = generate_timetable(&cfg).unwrap();

        assert_valid(&result, &cfg);
    }
}
