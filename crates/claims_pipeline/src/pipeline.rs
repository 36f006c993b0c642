//! Claims pipeline orchestration
//!
//! Sequences validation, status progression, and provider assignment over
//! the full claim collection, strictly in input order: earlier claims have
//! first call on scarce provider capacity, so reordering the input changes
//! assignment outcomes. That order sensitivity is documented behavior.

use std::collections::BTreeMap;

use tracing::{info, warn};

use core_kernel::{ProviderId, WarrantyId};
use domain_claims::{advance_status, validate_coverage, Claim, ClaimStatus, ValidationPolicy};
use domain_provider::{assign_provider, ServiceProvider};
use domain_warranty::WarrantyRecord;

use crate::error::PipelineError;

const DEFERRAL_NOTE: &str = "no provider with free capacity, assignment deferred";

/// Runs the pipeline over every claim and returns the processed set.
///
/// Per-claim data problems (unresolved warranty, expired coverage, no free
/// provider) become claim statuses and notes, never errors; a run only
/// fails for a malformed policy, and it fails before touching any claim.
/// The provider map is mutated in place as capacity is booked.
pub fn process_claims(
    claims: Vec<Claim>,
    warranties: &BTreeMap<WarrantyId, WarrantyRecord>,
    providers: &mut BTreeMap<ProviderId, ServiceProvider>,
    policy: &ValidationPolicy,
) -> Result<Vec<Claim>, PipelineError> {
    policy.validate()?;

    let total = claims.len();
    let mut processed = Vec::with_capacity(total);
    let mut assigned = 0usize;
    let mut deferred = 0usize;

    for mut claim in claims {
        let warranty = warranties.get(&claim.warranty_id);
        let (verdict, notes) = validate_coverage(&claim, warranty, policy);
        // The verdict is recorded once, at first validation; re-runs over
        // already-validated claims recompute it only to drive progression.
        if claim.status == ClaimStatus::Submitted {
            claim.record_coverage(verdict, &notes);
        }

        advance_status(&mut claim, verdict, policy)?;

        if claim.status == ClaimStatus::Approved {
            match assign_provider(providers, &claim.area_tags()) {
                Some(provider_id) => {
                    claim.service_provider = Some(provider_id);
                    claim.update_status(ClaimStatus::InProgress)?;
                    assigned += 1;
                }
                None => {
                    // Recoverable: the claim waits for a later run. The note
                    // is recorded once, however many runs defer the claim.
                    if !claim.validation_notes.contains(DEFERRAL_NOTE) {
                        claim.append_note(DEFERRAL_NOTE);
                    }
                    deferred += 1;
                    warn!(claim_id = %claim.claim_id, "assignment deferred, no free capacity");
                }
            }
        }

        processed.push(claim);
    }

    info!(total, assigned, deferred, "pipeline run complete");
    Ok(processed)
}
