//! Analytics aggregation
//!
//! A pure reduction over the final claim set into an immutable snapshot.
//! Every ratio is defined as 0.0 when its denominator is 0, so the
//! aggregator never divides by zero regardless of input shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{month_key, ProviderId, WarrantyId};
use domain_claims::{Claim, ClaimStatus, CoverageStatus};
use domain_provider::ServiceProvider;
use domain_warranty::WarrantyRecord;

/// Per-provider assignment and completion statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPerformance {
    pub provider_name: String,
    /// Claims in the processed set assigned to this provider
    pub assigned_count: usize,
    /// Assigned claims that reached `Completed`
    pub completed_count: usize,
    /// `completed_count / assigned_count`, 0.0 when nothing assigned
    pub completion_rate: f64,
}

/// Aggregate statistics over a processed claim set
///
/// An immutable snapshot with no lifecycle beyond the run that produced it.
/// Report renderers consume this as plain structured data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyAnalytics {
    /// Snapshot identifier
    pub report_id: Uuid,
    /// When the snapshot was generated
    pub generated_at: DateTime<Utc>,
    pub total_claims: usize,
    pub total_warranties: usize,
    /// Count per status; every status is present, 0 if unseen
    pub claims_by_status: BTreeMap<ClaimStatus, usize>,
    /// Count per coverage verdict, among claims that reached validation
    pub coverage_validation_results: BTreeMap<CoverageStatus, usize>,
    /// Sum over claims with a declared amount
    pub total_claim_amount: Decimal,
    /// Mean over claims with a declared amount; zero when none declared
    pub avg_claim_amount: Decimal,
    /// (Approved + InProgress + Completed) / claims past Submitted
    pub approval_rate: f64,
    pub provider_performance: BTreeMap<ProviderId, ProviderPerformance>,
    /// Claim counts bucketed by `YYYY-MM` of the claim date
    pub claims_by_month: BTreeMap<String, usize>,
}

/// Reduces the processed claim set into an analytics snapshot.
///
/// Claims without a declared amount are excluded from the average rather
/// than counted as zero, so a batch of no-amount claims does not drag the
/// statistic down. Provider stats are counted from the claims' assigned
/// provider fields; roster providers with no assignments appear zeroed.
pub fn generate_analytics(
    claims: &[Claim],
    warranties: &BTreeMap<WarrantyId, WarrantyRecord>,
    providers: &BTreeMap<ProviderId, ServiceProvider>,
) -> WarrantyAnalytics {
    let mut claims_by_status: BTreeMap<ClaimStatus, usize> =
        ClaimStatus::all().into_iter().map(|s| (s, 0)).collect();
    let mut coverage_validation_results: BTreeMap<CoverageStatus, usize> = BTreeMap::new();
    let mut claims_by_month: BTreeMap<String, usize> = BTreeMap::new();

    let mut total_claim_amount = Decimal::ZERO;
    let mut declared_amounts = 0usize;

    let mut assigned: BTreeMap<ProviderId, (usize, usize)> = BTreeMap::new();

    for claim in claims {
        *claims_by_status.entry(claim.status).or_insert(0) += 1;
        *claims_by_month.entry(month_key(claim.claim_date)).or_insert(0) += 1;

        if let Some(verdict) = claim.coverage_status {
            *coverage_validation_results.entry(verdict).or_insert(0) += 1;
        }

        if let Some(amount) = claim.claim_amount {
            total_claim_amount += amount;
            declared_amounts += 1;
        }

        if let Some(provider_id) = &claim.service_provider {
            let entry = assigned.entry(provider_id.clone()).or_insert((0, 0));
            entry.0 += 1;
            if claim.status == ClaimStatus::Completed {
                entry.1 += 1;
            }
        }
    }

    let avg_claim_amount = if declared_amounts > 0 {
        total_claim_amount / Decimal::from(declared_amounts as u64)
    } else {
        Decimal::ZERO
    };

    let validated = claims
        .iter()
        .filter(|c| c.status != ClaimStatus::Submitted)
        .count();
    let progressed = claims_by_status[&ClaimStatus::Approved]
        + claims_by_status[&ClaimStatus::InProgress]
        + claims_by_status[&ClaimStatus::Completed];
    let approval_rate = ratio(progressed, validated);

    let mut provider_performance: BTreeMap<ProviderId, ProviderPerformance> = providers
        .iter()
        .map(|(id, p)| {
            (
                id.clone(),
                ProviderPerformance {
                    provider_name: p.provider_name.clone(),
                    assigned_count: 0,
                    completed_count: 0,
                    completion_rate: 0.0,
                },
            )
        })
        .collect();
    for (provider_id, (assigned_count, completed_count)) in assigned {
        let entry = provider_performance
            .entry(provider_id.clone())
            .or_insert_with(|| ProviderPerformance {
                // Assigned by an earlier run; not on the current roster
                provider_name: provider_id.to_string(),
                assigned_count: 0,
                completed_count: 0,
                completion_rate: 0.0,
            });
        entry.assigned_count = assigned_count;
        entry.completed_count = completed_count;
        entry.completion_rate = ratio(completed_count, assigned_count);
    }

    WarrantyAnalytics {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        total_claims: claims.len(),
        total_warranties: warranties.len(),
        claims_by_status,
        coverage_validation_results,
        total_claim_amount,
        avg_claim_amount,
        approval_rate,
        provider_performance,
        claims_by_month,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
