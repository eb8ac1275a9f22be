//! Plan generation orchestration.
//!
//! Ties the pipeline together: payload deserialization → catalog
//! normalization → scheduling run → repair pass → plan with metadata. The
//! pipeline itself is pure; [`generate_plan`] stamps the current time while
//! [`generate_plan_at`] lets callers (and tests) own the timestamp.

use chrono::{DateTime, Utc};
use log::info;
use serde_json::Value;

use crate::catalog::{self, RawPayload};
use crate::error::{PlanError, PlanResult};
use crate::models::{Approach, PlanMetadata, SchedulePlan, SchedulingParameters};
use crate::scheduler;

/// Generate a plan from a payload value, stamped with the current time.
pub fn generate_plan(payload: &Value) -> PlanResult<SchedulePlan> {
    generate_plan_at(payload, Utc::now())
}

/// Generate a plan from a raw JSON string.
pub fn generate_plan_from_str(json: &str) -> PlanResult<SchedulePlan> {
    let payload: Value =
        serde_json::from_str(json).map_err(|e| PlanError::InvalidJson(e.to_string()))?;
    generate_plan(&payload)
}

/// Generate a plan with an explicit generation timestamp.
///
/// Given identical payload and timestamp, the output is byte-identical
/// across runs.
pub fn generate_plan_at(payload: &Value, generated_at: DateTime<Utc>) -> PlanResult<SchedulePlan> {
    let raw: RawPayload =
        serde_json::from_value(payload.clone()).map_err(|e| PlanError::InvalidJson(e.to_string()))?;

    if raw.classes.is_none() && raw.course_data.is_none() {
        return Err(PlanError::MissingCatalog);
    }
    let prefs = raw.preferences.as_ref().ok_or(PlanError::MissingPreferences)?;
    let params = SchedulingParameters::from_preferences(prefs)?;

    let catalog = catalog::normalize(&raw)?;
    info!(
        "Generating {} plan for {} classes starting {}",
        params.approach,
        catalog.len(),
        params.start_term
    );

    let schedule = scheduler::run_scheduler(&catalog, &params);

    Ok(SchedulePlan {
        metadata: PlanMetadata {
            approach: params.approach,
            start_semester: params.start_term.to_string(),
            generated_at: generated_at.to_rfc3339(),
            eil_level: match params.approach {
                Approach::SemesterBased => params.eil_level.clone(),
                Approach::CreditsBased => None,
            },
        },
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_payload(approach: &str) -> Value {
        json!({
            "classes": [
                {
                    "id": 1,
                    "class_name": "Intro to Programming",
                    "class_number": "CS 101",
                    "credits": 3,
                    "semesters_offered": ["Fall", "Winter"]
                }
            ],
            "preferences": {
                "approach": approach,
                "startSemester": "Fall 2025",
                "eilLevel": "Level 2"
            }
        })
    }

    #[test]
    fn test_missing_preferences_rejected() {
        let payload = json!({ "classes": [] });
        assert!(matches!(
            generate_plan(&payload),
            Err(PlanError::MissingPreferences)
        ));
    }

    #[test]
    fn test_missing_catalog_rejected_before_preferences() {
        let payload = json!({ "preferences": {} });
        assert!(matches!(
            generate_plan(&payload),
            Err(PlanError::MissingCatalog)
        ));
    }

    #[test]
    fn test_eil_level_only_on_semester_based_metadata() {
        let credits = generate_plan(&minimal_payload("credits-based")).unwrap();
        assert!(credits.metadata.eil_level.is_none());

        let semester = generate_plan(&minimal_payload("semester-based")).unwrap();
        assert_eq!(semester.metadata.eil_level, Some(json!("Level 2")));
        assert_eq!(semester.metadata.start_semester, "Fall 2025");
    }

    #[test]
    fn test_identical_inputs_identical_plans() {
        let payload = minimal_payload("credits-based");
        let at = "2026-01-15T00:00:00Z".parse().unwrap();
        let a = serde_json::to_string(&generate_plan_at(&payload, at).unwrap()).unwrap();
        let b = serde_json::to_string(&generate_plan_at(&payload, at).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_json_string_rejected() {
        assert!(matches!(
            generate_plan_from_str("not json {"),
            Err(PlanError::InvalidJson(_))
        ));
    }
}
