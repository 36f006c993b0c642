//! Claim aggregate

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ProviderId, WarrantyId};
use domain_warranty::CoverageType;

use crate::error::ClaimError;
use crate::validation::CoverageStatus;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Received from the claimant, not yet validated
    Submitted,
    /// Coverage validation has run
    Validated,
    /// Approved for service, awaiting provider assignment
    Approved,
    /// Assigned to a service provider
    InProgress,
    /// Service finished
    Completed,
    /// Denied after validation
    Denied,
    /// Cancelled by the claimant
    Cancelled,
}

impl ClaimStatus {
    /// Terminal states admit no further automated transition
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Completed | ClaimStatus::Denied | ClaimStatus::Cancelled
        )
    }

    /// All statuses, in lifecycle order. Used by analytics to emit a count
    /// for every status even when unseen.
    pub fn all() -> [ClaimStatus; 7] {
        [
            ClaimStatus::Submitted,
            ClaimStatus::Validated,
            ClaimStatus::Approved,
            ClaimStatus::InProgress,
            ClaimStatus::Completed,
            ClaimStatus::Denied,
            ClaimStatus::Cancelled,
        ]
    }
}

/// A warranty claim
///
/// Loaded in `Submitted` state and mutated in place by the pipeline stages;
/// never destroyed within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub claim_id: ClaimId,
    /// Referenced warranty (may not resolve in the warranty map)
    pub warranty_id: WarrantyId,
    /// Date the issue was claimed
    pub claim_date: NaiveDate,
    /// Free-text issue description
    pub issue_description: String,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Assigned service provider, once any
    pub service_provider: Option<ProviderId>,
    /// Claimed amount; absent when the claimant declared none
    pub claim_amount: Option<Decimal>,
    /// Coverage type the loader inferred from the issue description
    pub coverage_type: Option<CoverageType>,
    /// Coverage verdict, once validated
    pub coverage_status: Option<CoverageStatus>,
    /// Human-readable trail of validation and assignment outcomes
    pub validation_notes: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a newly submitted claim
    pub fn submitted(
        claim_id: ClaimId,
        warranty_id: WarrantyId,
        claim_date: NaiveDate,
        issue_description: impl Into<String>,
        claim_amount: Option<Decimal>,
    ) -> Result<Self, ClaimError> {
        if let Some(amount) = claim_amount {
            if amount.is_sign_negative() {
                return Err(ClaimError::InvalidAmount(format!(
                    "claim amount must be non-negative, got {amount}"
                )));
            }
        }
        let now = Utc::now();
        Ok(Self {
            claim_id,
            warranty_id,
            claim_date,
            issue_description: issue_description.into(),
            status: ClaimStatus::Submitted,
            service_provider: None,
            claim_amount,
            coverage_type: None,
            coverage_status: None,
            validation_notes: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Attaches the coverage type inferred from the issue description
    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.coverage_type = Some(coverage_type);
        self
    }

    /// Updates the status, rejecting illegal transitions
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Records the coverage verdict and its explanation
    pub fn record_coverage(&mut self, verdict: CoverageStatus, notes: &str) {
        self.coverage_status = Some(verdict);
        self.append_note(notes);
    }

    /// Manual cancellation; allowed from any non-terminal state
    pub fn cancel(&mut self) -> Result<(), ClaimError> {
        self.update_status(ClaimStatus::Cancelled)
    }

    /// External service-finished signal; only valid from `InProgress`
    pub fn complete(&mut self) -> Result<(), ClaimError> {
        self.update_status(ClaimStatus::Completed)
    }

    /// Appends a line to the validation trail
    pub fn append_note(&mut self, note: &str) {
        if note.is_empty() {
            return;
        }
        if !self.validation_notes.is_empty() {
            self.validation_notes.push_str("; ");
        }
        self.validation_notes.push_str(note);
        self.updated_at = Utc::now();
    }

    /// Service-area tags relevant to this claim, for provider matching.
    /// Empty when no tag information is available, in which case every
    /// provider is eligible.
    pub fn area_tags(&self) -> BTreeSet<String> {
        self.coverage_type
            .iter()
            .map(|t| t.tag().to_string())
            .collect()
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Submitted, Validated)
                | (Validated, Approved)
                | (Validated, Denied)
                | (Approved, InProgress)
                | (InProgress, Completed)
                | (Submitted, Cancelled)
                | (Validated, Cancelled)
                | (Approved, Cancelled)
                | (InProgress, Cancelled)
        )
    }
}
