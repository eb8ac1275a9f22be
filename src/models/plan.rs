//! Output-side plan types: semester slots, plan metadata, and the
//! serializable schedule plan returned to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::class::{ClassId, ClassRecord, Season};

/// Scheduling approach selected by the caller's preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Approach {
    #[serde(rename = "credits-based")]
    CreditsBased,
    #[serde(rename = "semester-based")]
    SemesterBased,
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Approach::CreditsBased => f.write_str("credits-based"),
            Approach::SemesterBased => f.write_str("semester-based"),
        }
    }
}

impl FromStr for Approach {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credits-based" => Ok(Approach::CreditsBased),
            "semester-based" => Ok(Approach::SemesterBased),
            other => Err(format!("Unknown scheduling approach: {other}")),
        }
    }
}

/// A start term such as "Fall 2025".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTerm {
    pub season: Season,
    pub year: i32,
}

impl fmt::Display for StartTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for StartTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let season = parts
            .next()
            .ok_or_else(|| format!("Invalid start semester: {s:?}"))?
            .parse::<Season>()?;
        let year = parts
            .next()
            .ok_or_else(|| format!("Invalid start semester: {s:?}"))?
            .parse::<i32>()
            .map_err(|e| format!("Invalid start semester year in {s:?}: {e}"))?;
        if parts.next().is_some() {
            return Err(format!("Invalid start semester: {s:?}"));
        }
        Ok(StartTerm { season, year })
    }
}

/// The class projection placed into a semester slot of the output plan.
///
/// Matches the wire contract: only display identity, credits, dependency ids,
/// offerings, and the `from_course` label are exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedClass {
    pub id: ClassId,
    pub class_name: String,
    pub class_number: String,
    pub credits: u32,
    pub prerequisites: Vec<ClassId>,
    pub corequisites: Vec<ClassId>,
    pub semesters_offered: Vec<Season>,
    pub from_course: Option<String>,
}

impl From<&ClassRecord> for PlannedClass {
    fn from(c: &ClassRecord) -> Self {
        PlannedClass {
            id: c.id,
            class_name: c.class_name.clone(),
            class_number: c.class_number.clone(),
            credits: c.credits,
            prerequisites: c.prerequisites.clone(),
            corequisites: c.corequisites.clone(),
            semesters_offered: c.semesters_offered.clone(),
            from_course: c.from_course.clone(),
        }
    }
}

/// One concrete (season, year) scheduling period of the output plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterSlot {
    #[serde(rename = "type")]
    pub season: Season,
    pub year: i32,
    pub classes: Vec<PlannedClass>,
    #[serde(rename = "totalCredits")]
    pub total_credits: u32,
}

impl SemesterSlot {
    pub fn empty(season: Season, year: i32) -> Self {
        SemesterSlot {
            season,
            year,
            classes: Vec::new(),
            total_credits: 0,
        }
    }
}

/// Run metadata attached to a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub approach: Approach,
    #[serde(rename = "startSemester")]
    pub start_semester: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    /// Opaque passthrough, only present for semester-based plans.
    #[serde(rename = "eilLevel", skip_serializing_if = "Option::is_none")]
    pub eil_level: Option<serde_json::Value>,
}

/// Ordered sequence of semester slots plus run metadata. Built once per run
/// and immutable after the repair pass completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub metadata: PlanMetadata,
    pub schedule: Vec<SemesterSlot>,
}
