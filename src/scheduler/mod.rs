//! Greedy semester scheduling.
//!
//! One policy-configured engine serves both scheduling approaches: the
//! [`policy::EnginePolicy`] selects the cap schedule, the language-sequence
//! pre-pass, the major-density limit, candidate ordering, prerequisite
//! visibility, and the termination rule. [`repair`] holds the bounded
//! post-pass that relocates a stranded trailing religion course.

pub mod engine;
pub mod policy;
pub mod repair;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use engine::run_engine;
pub use policy::{EnginePolicy, PrereqVisibility, Termination};

use crate::catalog::Catalog;
use crate::models::{Approach, SchedulingParameters, SemesterSlot};

/// Run the scheduling engine configured for the parameters' approach,
/// including the credits-based trailing-course repair pass.
pub fn run_scheduler(catalog: &Catalog, params: &SchedulingParameters) -> Vec<SemesterSlot> {
    let policy = EnginePolicy::for_params(params);
    let mut slots = engine::run_engine(catalog, params, &policy);
    if params.approach == Approach::CreditsBased {
        repair::relocate_trailing_religion(&mut slots, &policy.caps);
    }
    slots
}
