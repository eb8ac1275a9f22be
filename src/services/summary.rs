//! Catalog summary service: a normalization-only dry run.
//!
//! Lets callers validate a catalog payload and inspect basic shape counts
//! without generating a plan. The checksum identifies a payload across
//! uploads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, RawPayload};
use crate::error::{PlanError, PlanResult};

/// Counts and identity for a normalized catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_classes: usize,
    pub total_prerequisite_links: usize,
    pub total_corequisite_links: usize,
    /// SHA-256 over the canonical payload serialization.
    pub checksum: String,
}

/// Normalize the payload and report its shape, without scheduling.
pub fn summarize_catalog(payload: &Value) -> PlanResult<CatalogSummary> {
    let raw: RawPayload =
        serde_json::from_value(payload.clone()).map_err(|e| PlanError::InvalidJson(e.to_string()))?;
    if raw.classes.is_none() && raw.course_data.is_none() {
        return Err(PlanError::MissingCatalog);
    }

    let catalog = catalog::normalize(&raw)?;
    let total_prerequisite_links = catalog.iter().map(|c| c.prerequisites.len()).sum();
    let total_corequisite_links = catalog.iter().map(|c| c.corequisites.len()).sum();

    Ok(CatalogSummary {
        total_classes: catalog.len(),
        total_prerequisite_links,
        total_corequisite_links,
        checksum: compute_payload_checksum(payload),
    })
}

/// Compute a checksum for the payload JSON.
fn compute_payload_checksum(payload: &Value) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(payload.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_counts_links() {
        let payload = json!({
            "classes": [
                {
                    "id": 1,
                    "class_name": "A",
                    "class_number": "CS 101",
                    "credits": 3,
                    "semesters_offered": ["Fall"],
                    "corequisites": [2]
                },
                {
                    "id": 2,
                    "class_name": "B",
                    "class_number": "CS 101L",
                    "credits": 1,
                    "semesters_offered": ["Fall"],
                    "prerequisites": [1, 99]
                }
            ]
        });
        let summary = summarize_catalog(&payload).unwrap();
        assert_eq!(summary.total_classes, 2);
        // The dangling reference (99) is dropped before counting.
        assert_eq!(summary.total_prerequisite_links, 1);
        assert_eq!(summary.total_corequisite_links, 1);
        assert_eq!(summary.checksum.len(), 64);
    }

    #[test]
    fn test_checksum_stable_for_identical_payloads() {
        let payload = json!({ "classes": [], "preferences": {} });
        let a = summarize_catalog(&payload).unwrap();
        let b = summarize_catalog(&payload).unwrap();
        assert_eq!(a.checksum, b.checksum);
    }
}
