//! HTTP server module for the GradPlan backend.
//!
//! Exposes the planning core as a small REST API. The HTTP layer only
//! parses requests and serializes responses; all business logic lives in
//! the service layer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
