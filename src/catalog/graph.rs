//! The in-memory class graph and its derived views.
//!
//! The catalog is read-only shared state once built: both scheduling engines
//! consult it for lookups, corequisite-closure computation, and dependent
//! counts, while keeping their own mutable working sets per run.

use std::collections::{BTreeMap, HashSet};

use crate::models::{ClassId, ClassRecord};

/// Class numbers belonging to the language-program (EIL) sequence.
pub const EIL_NUMBERS: [&str; 5] = ["STDEV 100R", "EIL 201", "EIL 313", "EIL 317", "EIL 320"];

/// Canonical mapping from class id to class record.
///
/// Backed by a `BTreeMap` so that every iteration is in ascending id order —
/// plan output must be byte-identical across runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: BTreeMap<ClassId, ClassRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, record: ClassRecord) {
        self.classes.insert(record.id, record);
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassRecord> {
        self.classes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }

    /// Transitive closure over the corequisite relation starting from `id`.
    ///
    /// The closure always includes the starting class. A seen-set makes the
    /// traversal resilient to corequisite cycles; ids that do not resolve to
    /// a catalog entry are skipped.
    pub fn corequisite_closure(&self, id: ClassId) -> Vec<ClassId> {
        let Some(start) = self.get(id) else {
            return Vec::new();
        };
        let mut bundle = vec![start.id];
        let mut seen: HashSet<ClassId> = HashSet::from([start.id]);
        let mut to_visit = vec![start];
        while let Some(current) = to_visit.pop() {
            for &coreq_id in &current.corequisites {
                if seen.contains(&coreq_id) {
                    continue;
                }
                if let Some(found) = self.get(coreq_id) {
                    seen.insert(found.id);
                    bundle.push(found.id);
                    to_visit.push(found);
                }
            }
        }
        bundle
    }

    /// Number of other classes listing `id` as a prerequisite.
    ///
    /// Used only as a priority signal, never for correctness.
    pub fn dependent_count(&self, id: ClassId) -> usize {
        self.classes
            .values()
            .filter(|c| c.id != id && c.prerequisites.contains(&id))
            .count()
    }
}

fn label_matches(from_course: Option<&str>, wanted: &[&str]) -> bool {
    from_course
        .map(|label| wanted.iter().any(|w| label.eq_ignore_ascii_case(w)))
        .unwrap_or(false)
}

/// Religion predicate over the raw (number, label) pair. Exposed separately
/// so the repair pass can classify already-serialized plan entries.
pub fn is_religion_parts(class_number: &str, from_course: Option<&str>) -> bool {
    label_matches(from_course, &["religion"]) || class_number.starts_with("REL ")
}

pub fn is_religion(class: &ClassRecord) -> bool {
    is_religion_parts(&class.class_number, class.from_course.as_deref())
}

/// Language-program membership: the `EIL` label or one of the fixed numbers.
pub fn is_language(class: &ClassRecord) -> bool {
    label_matches(class.from_course.as_deref(), &["eil"])
        || EIL_NUMBERS.contains(&class.class_number.as_str())
}

/// Major-course predicate: CS classes are treated as major.
pub fn is_major(class: &ClassRecord) -> bool {
    label_matches(class.from_course.as_deref(), &["computer science", "cs"])
        || class.class_number.starts_with("CS ")
}
