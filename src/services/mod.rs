//! High-level business logic: payload orchestration and catalog summaries.

pub mod planner;
pub mod summary;

pub use planner::{generate_plan, generate_plan_at, generate_plan_from_str};
pub use summary::{summarize_catalog, CatalogSummary};
