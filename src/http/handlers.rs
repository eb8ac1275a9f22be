//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Plan generation is CPU-bound, so it runs on the blocking
//! pool rather than starving the async executor.

use axum::{extract::State, Json};
use serde_json::Value;

use super::dto::{CatalogSummary, HealthResponse, SchedulePlan};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = chrono::Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        uptime_seconds: uptime,
    })
}

/// POST /v1/plans
///
/// Generate a semester plan from a catalog + preferences payload.
/// Normalization failures come back as the `{ "error": ... }` body.
pub async fn generate_plan(Json(payload): Json<Value>) -> HandlerResult<SchedulePlan> {
    let plan = tokio::task::spawn_blocking(move || services::generate_plan(&payload))
        .await
        .map_err(|e| AppError::Internal(format!("Plan generation task failed: {e}")))??;
    Ok(Json(plan))
}

/// POST /v1/catalog/summary
///
/// Normalize a catalog payload without scheduling and report its shape.
pub async fn catalog_summary(Json(payload): Json<Value>) -> HandlerResult<CatalogSummary> {
    let summary = tokio::task::spawn_blocking(move || services::summarize_catalog(&payload))
        .await
        .map_err(|e| AppError::Internal(format!("Summary task failed: {e}")))??;
    Ok(Json(summary))
}
