use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

crate::define_id_type!(i64, ClassId);

/// Academic season. Seasons cycle Fall → Winter → Spring → Fall; the calendar
/// year increments only on the Fall → Winter transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Fall,
    Winter,
    Spring,
}

impl Season {
    /// The season following this one in the academic cycle.
    pub fn next(self) -> Season {
        match self {
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
            Season::Spring => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fall" => Ok(Season::Fall),
            "Winter" => Ok(Season::Winter),
            "Spring" => Ok(Season::Spring),
            other => Err(format!("Unknown season: {other}")),
        }
    }
}

/// Identity and attributes of one schedulable unit.
///
/// The legacy-only fields (`course_id`, `course_type`, `section_id`,
/// `is_elective_section`, `credits_needed`) are passthrough metadata carried
/// for callers outside the scheduling core; they never influence placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: ClassId,
    pub class_name: String,
    pub class_number: String,
    pub credits: u32,
    pub semesters_offered: Vec<Season>,
    pub prerequisites: Vec<ClassId>,
    pub corequisites: Vec<ClassId>,
    /// Optional free-text classification (e.g. "Religion", "EIL",
    /// "Computer Science"). When absent, rule predicates fall back to the
    /// `class_number` prefix.
    pub from_course: Option<String>,

    // Legacy payload passthrough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_elective_section: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_needed: Option<u32>,
}

impl ClassRecord {
    /// Whether this class may be placed into a slot with the given season.
    pub fn offered_in(&self, season: Season) -> bool {
        self.semesters_offered.contains(&season)
    }
}
