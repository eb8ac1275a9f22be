//! Domain error types for plan generation.
//!
//! Only two failure kinds exist: structural payload errors and missing
//! required class fields. Everything else (dangling dependency references,
//! classes that can never be placed, stalled progress) is handled by silent
//! omission inside the scheduler, not by raising an error.

use crate::models::ClassId;

/// Result type for plan generation operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Error type for payload normalization and plan generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The payload carried neither a `classes` list nor a `courseData` list.
    #[error("Invalid payload structure: expected 'classes' or 'courseData'")]
    MissingCatalog,

    /// The payload carried no `preferences` object.
    #[error("Invalid payload structure: missing 'preferences'")]
    MissingPreferences,

    /// The payload was not syntactically valid JSON or could not be
    /// deserialized into the expected shape.
    #[error("Invalid payload JSON: {0}")]
    InvalidJson(String),

    /// A resolved class is missing one of the required fields
    /// (`class_name`, `credits`, `semesters_offered`).
    #[error("Invalid class data: missing {field} in class {class_id}")]
    MissingField {
        class_id: ClassId,
        field: &'static str,
    },

    /// The preferences object carried a value the scheduler cannot use.
    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),
}

impl PlanError {
    /// The wire message for the `{ "error": <message> }` response channel.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
