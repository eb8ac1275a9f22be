//! Data Transfer Objects for the HTTP API.
//!
//! The plan and summary response bodies are the service-layer types
//! themselves — they already serialize to the wire contract.

use serde::{Deserialize, Serialize};

pub use crate::models::SchedulePlan;
pub use crate::services::CatalogSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

/// The `{ "error": <message> }` body returned for any failed request.
/// Callers must check for this shape before treating a response as a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
