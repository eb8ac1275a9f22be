//! Catalog normalization and the in-memory class graph.
//!
//! [`normalizer`] merges either of the two accepted payload shapes into one
//! canonical [`graph::Catalog`]; [`graph`] provides the derived views
//! (corequisite closures, dependent counts, category predicates) shared by
//! both scheduling approaches.

pub mod graph;
pub mod normalizer;

pub use graph::Catalog;
pub use normalizer::{normalize, RawPayload};
