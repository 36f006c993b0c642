//! Coverage validation
//!
//! Pure verdict logic: given a claim, the warranty it references (if it
//! resolved), and the validation policy, produce a coverage status and a
//! human-readable explanation. Nothing here errors; every data problem is
//! a verdict, so the consumer can always see why a claim did not progress.

use serde::{Deserialize, Serialize};
use std::fmt;

use domain_warranty::WarrantyRecord;

use crate::claim::Claim;
use crate::policy::ValidationPolicy;

/// Coverage verdict for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// Active warranty covers the issue
    Covered,
    /// Warranty exists but does not cover the claimed issue type
    NotCovered,
    /// Claim dated outside the warranty coverage window
    Expired,
    /// Referenced warranty does not exist
    Invalid,
}

impl CoverageStatus {
    pub fn all() -> [CoverageStatus; 4] {
        [
            CoverageStatus::Covered,
            CoverageStatus::NotCovered,
            CoverageStatus::Expired,
            CoverageStatus::Invalid,
        ]
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoverageStatus::Covered => "covered",
            CoverageStatus::NotCovered => "not covered",
            CoverageStatus::Expired => "expired",
            CoverageStatus::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

/// Validates a claim's coverage against its warranty.
///
/// The coverage window is half-open: a claim dated exactly on the warranty
/// start date is covered, one dated exactly on the end date is expired.
/// Malformed dates are a loader concern and never reach this function.
pub fn validate_coverage(
    claim: &Claim,
    warranty: Option<&WarrantyRecord>,
    policy: &ValidationPolicy,
) -> (CoverageStatus, String) {
    let Some(warranty) = warranty else {
        return (
            CoverageStatus::Invalid,
            format!("warranty {} not found", claim.warranty_id),
        );
    };

    if policy.require_active_warranty {
        // Month arithmetic only fails on dates far outside any plausible
        // warranty horizon; treat that as an expired window.
        let active = warranty.is_active_on(claim.claim_date).unwrap_or(false);
        if !active {
            return (
                CoverageStatus::Expired,
                format!(
                    "claim date {} outside coverage window starting {} ({} months)",
                    claim.claim_date,
                    warranty.warranty_start_date,
                    warranty.warranty_duration_months
                ),
            );
        }
    }

    if policy.validate_coverage_type {
        if let Some(warranty_type) = &warranty.coverage_type {
            if !warranty_type.accepts(claim.coverage_type.as_ref()) {
                return (
                    CoverageStatus::NotCovered,
                    format!(
                        "warranty covers '{}' but claim is for '{}'",
                        warranty_type,
                        claim
                            .coverage_type
                            .as_ref()
                            .map(|t| t.tag())
                            .unwrap_or("unknown")
                    ),
                );
            }
        }
    }

    (
        CoverageStatus::Covered,
        format!("covered by warranty {}", warranty.warranty_id),
    )
}
