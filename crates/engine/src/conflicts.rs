//! Conflict graph: subjects that share a student group.

use std::collections::{BTreeMap, BTreeSet};

use examsched_domain::StudentGroup;

/// Undirected co-enrollment adjacency between subjects.
///
/// Ordered containers throughout: seeded runs must consume the PRNG and
/// emit results in a reproducible order, so every iteration the scheduler
/// performs over this graph has to be deterministic.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl ConflictGraph {
    /// Build from group memberships: every distinct pair of subjects within
    /// a group becomes an edge. Self-loops are excluded.
    pub fn build(groups: &[StudentGroup]) -> Self {
        let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for group in groups {
            for subject in &group.subjects {
                let entry = adjacency.entry(subject.clone()).or_default();
                for other in &group.subjects {
                    if other != subject {
                        entry.insert(other.clone());
                    }
                }
            }
        }

        Self { adjacency }
    }

    /// Subjects in conflict with `subject`, in lexicographic order.
    pub fn neighbors(&self, subject: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(subject)
    }

    /// Number of subjects this one conflicts with.
    pub fn degree(&self, subject: &str) -> usize {
        self.adjacency.get(subject).map_or(0, BTreeSet::len)
    }

    /// Adjacency as plain lists covering every listed subject, for
    /// no-solution diagnostics.
    pub fn to_adjacency_lists(&self, subjects: &[String]) -> BTreeMap<String, Vec<String>> {
        subjects
            .iter()
            .map(|subject| {
                let neighbors = self
                    .adjacency
                    .get(subject)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default();
                (subject.clone(), neighbors)
            })
            .collect()
    }
}
