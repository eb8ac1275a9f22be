//! # GradPlan Rust Backend
//!
//! Course planning engine for multi-semester degree schedules.
//!
//! This crate turns a catalog of academic classes (prerequisites, corequisites,
//! credit values, term-offering patterns) plus a set of planning preferences
//! into an ordered semester plan. Two greedy scheduling approaches are
//! supported — "credits-based" and "semester-based" — both running through a
//! single policy-configured engine. The backend optionally exposes a REST API
//! via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core data types (class records, seasons, semester plans)
//! - [`catalog`]: Payload normalization and the in-memory class graph
//! - [`scheduler`]: Timeline generation, the greedy engine, and the repair pass
//! - [`services`]: High-level orchestration from raw payload to finished plan
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Data flows strictly downward: normalizer → class graph → timeline →
//! scheduler → repair pass → final plan. The class graph is read-only shared
//! state; each scheduling run owns its own mutable working sets.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{PlanError, PlanResult};
