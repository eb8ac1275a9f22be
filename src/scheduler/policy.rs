//! Engine configuration.
//!
//! The two scheduling approaches share one greedy engine; everything that
//! differs between them lives here as policy.

use crate::models::{Approach, Season, SchedulingParameters};

/// Fixed per-season caps used by the semester-based approach.
const SEMESTER_BASED_FALL_WINTER_CAP: u32 = 18;
const SEMESTER_BASED_SPRING_CAP: u32 = 12;
const SEMESTER_BASED_FIRST_YEAR_FALL_WINTER_CAP: u32 = 15;
const SEMESTER_BASED_FIRST_YEAR_SPRING_CAP: u32 = 10;

/// Number of leading slots the first-year caps apply to.
const FIRST_YEAR_SLOTS: usize = 3;

/// Per-season credit caps, with optional reduced caps for the first year.
#[derive(Debug, Clone)]
pub struct CapSchedule {
    pub fall_winter: u32,
    pub spring: u32,
    pub first_year_fall_winter: u32,
    pub first_year_spring: u32,
    pub limit_first_year: bool,
}

impl CapSchedule {
    /// Cap for the slot at `index` counted from the start of the plan.
    pub fn cap_for(&self, season: Season, index: usize) -> u32 {
        if self.limit_first_year && index < FIRST_YEAR_SLOTS {
            match season {
                Season::Spring => self.first_year_spring,
                _ => self.first_year_fall_winter,
            }
        } else {
            self.base_cap(season)
        }
    }

    /// The regular (non first-year) cap for a season. Also the cap the
    /// repair pass checks relocation targets against.
    pub fn base_cap(&self, season: Season) -> u32 {
        match season {
            Season::Spring => self.spring,
            _ => self.fall_winter,
        }
    }
}

/// When a class's prerequisites are considered satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrereqVisibility {
    /// A class placed earlier in the same slot scan already counts.
    /// This is the historical behavior.
    WithinSlot,
    /// Only classes placed in strictly prior slots count.
    PriorSlotsOnly,
}

/// Termination rule for the main scheduling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop once all classes are placed, or after the initial slot batch
    /// plus this many extra slots — a hard bound, since some classes may
    /// never become placeable.
    ExtraSlots(usize),
    /// Produce at least `min_slots` slots; past the minimum, stop as soon
    /// as no classes remain or `stall_rounds` consecutive slots placed
    /// nothing.
    MinSlotsWithStall {
        min_slots: usize,
        stall_rounds: usize,
    },
}

/// Full configuration of one engine run.
#[derive(Debug, Clone)]
pub struct EnginePolicy {
    pub approach: Approach,
    pub caps: CapSchedule,
    pub initial_slots: usize,
    /// Run the fixed two-term language-sequence pre-pass and keep language
    /// classes out of the generic scan.
    pub language_prepass: bool,
    /// Maximum count of major-flagged classes per slot, if limited.
    pub major_class_limit: Option<u32>,
    /// Order candidates by the constrained-first priority tuple instead of
    /// catalog id order.
    pub priority_ordering: bool,
    pub prereq_visibility: PrereqVisibility,
    pub termination: Termination,
}

impl EnginePolicy {
    pub fn for_params(params: &SchedulingParameters) -> Self {
        match params.approach {
            Approach::CreditsBased => Self::credits_based(params),
            Approach::SemesterBased => Self::semester_based(params),
        }
    }

    /// Credits-based approach: configurable caps, language pre-pass,
    /// major-density limit, priority ordering, safety-bounded extension.
    pub fn credits_based(params: &SchedulingParameters) -> Self {
        EnginePolicy {
            approach: Approach::CreditsBased,
            caps: CapSchedule {
                fall_winter: params.fall_winter_credit_cap,
                spring: params.spring_credit_cap,
                first_year_fall_winter: params.first_year_fall_winter_cap,
                first_year_spring: params.first_year_spring_cap,
                limit_first_year: params.limit_first_year,
            },
            initial_slots: 15,
            language_prepass: true,
            major_class_limit: Some(params.major_class_limit),
            priority_ordering: true,
            prereq_visibility: PrereqVisibility::WithinSlot,
            termination: Termination::ExtraSlots(10),
        }
    }

    /// Semester-based approach: fixed caps, catalog-order scan, minimum
    /// plan length with stall detection. Caller-supplied credit caps are
    /// deliberately ignored.
    pub fn semester_based(params: &SchedulingParameters) -> Self {
        EnginePolicy {
            approach: Approach::SemesterBased,
            caps: CapSchedule {
                fall_winter: SEMESTER_BASED_FALL_WINTER_CAP,
                spring: SEMESTER_BASED_SPRING_CAP,
                first_year_fall_winter: SEMESTER_BASED_FIRST_YEAR_FALL_WINTER_CAP,
                first_year_spring: SEMESTER_BASED_FIRST_YEAR_SPRING_CAP,
                limit_first_year: params.limit_first_year,
            },
            initial_slots: 10,
            language_prepass: false,
            major_class_limit: None,
            priority_ordering: false,
            prereq_visibility: PrereqVisibility::WithinSlot,
            termination: Termination::MinSlotsWithStall {
                min_slots: 10,
                stall_rounds: 3,
            },
        }
    }
}
