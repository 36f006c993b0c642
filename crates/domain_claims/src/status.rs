//! Claim status progression
//!
//! One transition function applied once per claim per pipeline pass. The
//! transition table in [`Claim::update_status`] makes illegal moves
//! unrepresentable; this module decides which legal move to take given the
//! coverage verdict and the approval policy.

use rust_decimal::Decimal;
use tracing::debug;

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::policy::ValidationPolicy;
use crate::validation::CoverageStatus;

/// Advances a claim's lifecycle state from its coverage verdict.
///
/// A `Submitted` claim moves through `Validated` and on to `Approved` or
/// `Denied` within the same pass. Terminal states and `InProgress` are left
/// untouched, so re-running a pass over already-processed claims changes
/// nothing.
///
/// Policy choice: a claim with no declared amount is treated as amount zero
/// for the threshold comparison, so it is always eligible for auto-approval.
pub fn advance_status(
    claim: &mut Claim,
    coverage: CoverageStatus,
    policy: &ValidationPolicy,
) -> Result<ClaimStatus, ClaimError> {
    if claim.status.is_terminal() || claim.status == ClaimStatus::InProgress {
        return Ok(claim.status);
    }

    if claim.status == ClaimStatus::Submitted {
        claim.update_status(ClaimStatus::Validated)?;
    }

    if claim.status == ClaimStatus::Validated {
        if coverage == CoverageStatus::Covered {
            claim.update_status(ClaimStatus::Approved)?;
            let amount = claim.claim_amount.unwrap_or(Decimal::ZERO);
            if amount <= policy.auto_approve_threshold {
                claim.append_note("auto-approved under threshold");
            } else {
                claim.append_note("approved, manual review required before service");
            }
        } else {
            claim.update_status(ClaimStatus::Denied)?;
            claim.append_note(&format!("denied: coverage {coverage}"));
        }
        debug!(claim_id = %claim.claim_id, status = ?claim.status, "claim advanced");
    }

    // Approved + Covered: nothing to do, the claim waits for assignment.
    Ok(claim.status)
}
