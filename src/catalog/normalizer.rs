//! Catalog payload normalization.
//!
//! Accepts payloads in exactly one of two shapes — a flat `classes` list
//! where each entry already carries a `from_course` label, or the legacy
//! nested `courseData` shape where classes live under course → section
//! groupings — and merges either into one canonical [`Catalog`].
//!
//! Dependency references may be bare integer ids or objects carrying an
//! `id` field; ids that do not resolve to a known class are silently
//! dropped. A course whose id equals the `"additional"` sentinel denotes a
//! pool of supplemental requirement classes with special category
//! inheritance. Normalization is pure: no state survives a call.

use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::graph::Catalog;
use crate::error::{PlanError, PlanResult};
use crate::models::{ClassId, ClassRecord, Preferences, Season};

/// Course-level sentinel marking the supplemental requirement pool.
const ADDITIONAL_COURSE_ID: &str = "additional";

/// A prerequisite/corequisite reference: either a bare id or an object
/// carrying an `id` field. Anything else is tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DependencyRef {
    Id(i64),
    Object { id: Option<i64> },
    Other(serde_json::Value),
}

impl DependencyRef {
    fn id(&self) -> Option<ClassId> {
        match self {
            DependencyRef::Id(v) => Some(ClassId::new(*v)),
            DependencyRef::Object { id } => id.map(ClassId::new),
            DependencyRef::Other(_) => None,
        }
    }
}

/// Raw class object, shared by both payload shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClass {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub class_number: Option<String>,
    #[serde(default)]
    pub credits: Option<u32>,
    #[serde(default)]
    pub semesters_offered: Option<Vec<String>>,
    #[serde(default)]
    pub prerequisites: Vec<DependencyRef>,
    #[serde(default)]
    pub corequisites: Vec<DependencyRef>,
    #[serde(default)]
    pub from_course: Option<String>,
}

/// Course id in the legacy shape: an integer or a string such as
/// `"additional"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CourseKey {
    Int(i64),
    Text(String),
}

impl CourseKey {
    fn as_string(&self) -> String {
        match self {
            CourseKey::Int(v) => v.to_string(),
            CourseKey::Text(s) => s.clone(),
        }
    }

    fn is_additional(&self) -> bool {
        matches!(self, CourseKey::Text(s) if s == ADDITIONAL_COURSE_ID)
    }
}

/// Legacy section grouping. `is_required` and `credits_needed_to_take` are
/// recorded as passthrough attributes, not used in scheduling math.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_required: bool,
    #[serde(default, rename = "credits_needed_to_take")]
    pub credits_needed: Option<u32>,
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

fn default_true() -> bool {
    true
}

/// Legacy course grouping under `courseData`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    #[serde(default)]
    pub id: Option<CourseKey>,
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

/// Top-level payload: catalog data in one of the two shapes plus the
/// caller's planning preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub classes: Option<Vec<RawClass>>,
    #[serde(default, rename = "courseData")]
    pub course_data: Option<Vec<RawCourse>>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// A class accumulated during normalization, before validation.
#[derive(Debug, Clone)]
struct PendingClass {
    id: ClassId,
    class_name: Option<String>,
    class_number: String,
    credits: Option<u32>,
    semesters_offered: Option<Vec<Season>>,
    prerequisites: Vec<ClassId>,
    corequisites: Vec<ClassId>,
    from_course: Option<String>,
    course_id: Option<String>,
    course_type: Option<String>,
    section_id: Option<i64>,
    is_elective_section: Option<bool>,
    credits_needed: Option<u32>,
}

impl PendingClass {
    fn from_raw(raw: &RawClass, id: ClassId) -> Self {
        PendingClass {
            id,
            class_name: raw.class_name.clone(),
            class_number: raw.class_number.clone().unwrap_or_default(),
            credits: raw.credits,
            semesters_offered: raw.semesters_offered.as_ref().map(|s| parse_seasons(s)),
            prerequisites: raw.prerequisites.iter().filter_map(DependencyRef::id).collect(),
            corequisites: raw.corequisites.iter().filter_map(DependencyRef::id).collect(),
            from_course: raw.from_course.clone(),
            course_id: None,
            course_type: None,
            section_id: None,
            is_elective_section: None,
            credits_needed: None,
        }
    }
}

/// Season labels are matched against the fixed vocabulary; anything else is
/// dropped rather than rejected (an unknown season can simply never match a
/// slot).
fn parse_seasons(labels: &[String]) -> Vec<Season> {
    labels
        .iter()
        .filter_map(|label| match Season::from_str(label) {
            Ok(season) => Some(season),
            Err(_) => {
                debug!("Dropping unknown season label: {label}");
                None
            }
        })
        .collect()
}

/// Merge a payload into a canonical catalog.
///
/// Fails only on structural problems: no catalog section at all, or a
/// resolved class missing one of `class_name`, `credits`,
/// `semesters_offered`. Dangling dependency references are dropped, never
/// reported.
pub fn normalize(payload: &RawPayload) -> PlanResult<Catalog> {
    let mut pending: BTreeMap<ClassId, PendingClass> = BTreeMap::new();

    if let Some(classes) = &payload.classes {
        collect_flat(classes, &mut pending);
    } else if let Some(courses) = &payload.course_data {
        collect_legacy(courses, &mut pending);
    } else {
        return Err(PlanError::MissingCatalog);
    }

    // Keep only dependency ids that resolve within this catalog.
    let known: Vec<ClassId> = pending.keys().copied().collect();
    for class in pending.values_mut() {
        class.prerequisites.retain(|id| known.contains(id));
        class.corequisites.retain(|id| known.contains(id));
    }

    let mut catalog = Catalog::new();
    for class in pending.into_values() {
        catalog.insert(validate_class(class)?);
    }
    info!("Processed {} classes", catalog.len());
    Ok(catalog)
}

fn collect_flat(classes: &[RawClass], pending: &mut BTreeMap<ClassId, PendingClass>) {
    for raw in classes {
        let Some(id) = raw.id.map(ClassId::new) else {
            continue;
        };
        pending.insert(id, PendingClass::from_raw(raw, id));
    }
}

fn collect_legacy(courses: &[RawCourse], pending: &mut BTreeMap<ClassId, PendingClass>) {
    for course in courses {
        if course.id.as_ref().is_some_and(CourseKey::is_additional) {
            collect_additional(course, pending);
            continue;
        }
        let course_id = course.id.as_ref().map(CourseKey::as_string);
        for section in &course.sections {
            for raw in &section.classes {
                let Some(id) = raw.id.map(ClassId::new) else {
                    continue;
                };
                let mut class = PendingClass::from_raw(raw, id);
                class.course_id = course_id.clone();
                class.course_type = course.course_type.clone();
                class.section_id = section.id;
                class.is_elective_section = Some(!section.is_required);
                class.credits_needed = section.credits_needed;
                pending.insert(id, class);
            }
        }
    }
}

/// Supplemental requirement pool: each class inherits the `course_type` of
/// its first corequisite that already resolved to a known class, and
/// defaults to `"system"` otherwise. Lookup is against the catalog built so
/// far, so ordering within `courseData` matters.
fn collect_additional(course: &RawCourse, pending: &mut BTreeMap<ClassId, PendingClass>) {
    for section in &course.sections {
        for raw in &section.classes {
            let Some(id) = raw.id.map(ClassId::new) else {
                continue;
            };
            let mut course_type = "system".to_string();
            for dep in &raw.corequisites {
                let Some(coreq_id) = dep.id() else { continue };
                if let Some(found) = pending.get(&coreq_id) {
                    course_type = found
                        .course_type
                        .clone()
                        .unwrap_or_else(|| "system".to_string());
                    break;
                }
            }
            let mut class = PendingClass::from_raw(raw, id);
            class.course_id = Some(ADDITIONAL_COURSE_ID.to_string());
            class.course_type = Some(course_type);
            class.section_id = section.id;
            class.is_elective_section = Some(false);
            pending.insert(id, class);
        }
    }
}

fn validate_class(class: PendingClass) -> PlanResult<ClassRecord> {
    let id = class.id;
    let class_name = match class.class_name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(PlanError::MissingField {
                class_id: id,
                field: "class_name",
            })
        }
    };
    let credits = class.credits.ok_or(PlanError::MissingField {
        class_id: id,
        field: "credits",
    })?;
    let semesters_offered = class.semesters_offered.ok_or(PlanError::MissingField {
        class_id: id,
        field: "semesters_offered",
    })?;

    Ok(ClassRecord {
        id,
        class_name,
        class_number: class.class_number,
        credits,
        semesters_offered,
        prerequisites: class.prerequisites,
        corequisites: class.corequisites,
        from_course: class.from_course,
        course_id: class.course_id,
        course_type: class.course_type,
        section_id: class.section_id,
        is_elective_section: class.is_elective_section,
        credits_needed: class.credits_needed,
    })
}
