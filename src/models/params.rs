//! Planning preferences as supplied by the caller, and the resolved
//! immutable configuration one scheduling run operates under.

use serde::{Deserialize, Serialize};

use super::plan::{Approach, StartTerm};
use crate::error::{PlanError, PlanResult};

pub const DEFAULT_START_SEMESTER: &str = "Fall 2025";
pub const DEFAULT_FALL_WINTER_CREDITS: u32 = 16;
pub const DEFAULT_SPRING_CREDITS: u32 = 10;
pub const DEFAULT_MAJOR_CLASS_LIMIT: u32 = 3;

/// First-year credit caps, only honored when `limitFirstYear` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstYearLimits {
    #[serde(default)]
    pub fall_winter_credits: Option<u32>,
    #[serde(default)]
    pub spring_credits: Option<u32>,
}

/// Raw preferences object as carried by the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub approach: Option<String>,
    #[serde(default)]
    pub start_semester: Option<String>,
    #[serde(default)]
    pub limit_first_year: bool,
    // Credits-based knobs (absent for semester-based runs).
    #[serde(default)]
    pub fall_winter_credits: Option<u32>,
    #[serde(default)]
    pub spring_credits: Option<u32>,
    #[serde(default)]
    pub major_class_limit: Option<u32>,
    #[serde(default)]
    pub first_year_limits: Option<FirstYearLimits>,
    /// Opaque passthrough, semester-based only.
    #[serde(default)]
    pub eil_level: Option<serde_json::Value>,
}

/// Immutable configuration for one scheduling run.
#[derive(Debug, Clone)]
pub struct SchedulingParameters {
    pub approach: Approach,
    pub start_term: StartTerm,
    pub limit_first_year: bool,
    pub fall_winter_credit_cap: u32,
    pub spring_credit_cap: u32,
    pub major_class_limit: u32,
    pub first_year_fall_winter_cap: u32,
    pub first_year_spring_cap: u32,
    pub eil_level: Option<serde_json::Value>,
}

impl SchedulingParameters {
    /// Resolve raw preferences into run parameters, applying defaults.
    ///
    /// Absent approach falls back to credits-based; an unparseable approach
    /// or start semester is rejected rather than guessed at.
    pub fn from_preferences(prefs: &Preferences) -> PlanResult<Self> {
        let approach = match prefs.approach.as_deref() {
            None => Approach::CreditsBased,
            Some(s) => s
                .parse::<Approach>()
                .map_err(PlanError::InvalidPreferences)?,
        };

        let start_term = prefs
            .start_semester
            .as_deref()
            .unwrap_or(DEFAULT_START_SEMESTER)
            .parse::<StartTerm>()
            .map_err(PlanError::InvalidPreferences)?;

        let fall_winter = prefs
            .fall_winter_credits
            .unwrap_or(DEFAULT_FALL_WINTER_CREDITS);
        let spring = prefs.spring_credits.unwrap_or(DEFAULT_SPRING_CREDITS);

        let first_year = prefs.first_year_limits.clone().unwrap_or_default();

        Ok(SchedulingParameters {
            approach,
            start_term,
            limit_first_year: prefs.limit_first_year,
            fall_winter_credit_cap: fall_winter,
            spring_credit_cap: spring,
            major_class_limit: prefs
                .major_class_limit
                .unwrap_or(DEFAULT_MAJOR_CLASS_LIMIT),
            first_year_fall_winter_cap: first_year.fall_winter_credits.unwrap_or(fall_winter),
            first_year_spring_cap: first_year.spring_credits.unwrap_or(spring),
            eil_level: prefs.eil_level.clone(),
        })
    }
}
