//! End-to-end pipeline tests
//!
//! The scenario tests mirror the documented acceptance cases: boundary
//! coverage dates, auto-approval under the threshold, capacity contention
//! between claims, and unresolved warranty references.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use claims_pipeline::{
    generate_analytics, process_claims, ClaimSource, InMemorySource, PipelineError,
    ProviderSource, WarrantySource,
};
use core_kernel::{CoreError, ProviderId, WarrantyId};
use domain_claims::{Claim, ClaimStatus, CoverageStatus, ValidationPolicy};
use domain_provider::ServiceProvider;
use domain_warranty::WarrantyRecord;
use test_utils::fixtures::{AmountFixtures, TemporalFixtures};
use test_utils::{ClaimBuilder, ProviderBuilder, WarrantyBuilder};

fn warranty_map(warranties: Vec<WarrantyRecord>) -> BTreeMap<WarrantyId, WarrantyRecord> {
    warranties
        .into_iter()
        .map(|w| (w.warranty_id.clone(), w))
        .collect()
}

fn provider_map(providers: Vec<ServiceProvider>) -> BTreeMap<ProviderId, ServiceProvider> {
    providers
        .into_iter()
        .map(|p| (p.provider_id.clone(), p))
        .collect()
}

fn run(
    claims: Vec<Claim>,
    warranties: Vec<WarrantyRecord>,
    providers: &mut BTreeMap<ProviderId, ServiceProvider>,
    policy: &ValidationPolicy,
) -> Vec<Claim> {
    process_claims(claims, &warranty_map(warranties), providers, policy).unwrap()
}

#[test]
fn test_scenario_a_mid_window_claim_is_covered() {
    // 12-month warranty from 2024-01-01, claim dated 2024-06-01
    let processed = run(
        vec![ClaimBuilder::new()
            .with_date(TemporalFixtures::mid_warranty_claim_date())
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed[0].coverage_status, Some(CoverageStatus::Covered));
}

#[test]
fn test_scenario_b_end_boundary_is_expired() {
    // claim dated exactly 2025-01-01, the end of the 12-month window
    let processed = run(
        vec![ClaimBuilder::new()
            .with_date(TemporalFixtures::warranty_end_boundary())
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed[0].coverage_status, Some(CoverageStatus::Expired));
    assert_eq!(processed[0].status, ClaimStatus::Denied);
}

#[test]
fn test_scenario_c_small_amount_auto_approves() {
    let policy = ValidationPolicy {
        auto_approve_threshold: AmountFixtures::threshold(),
        ..Default::default()
    };
    let processed = run(
        vec![ClaimBuilder::new()
            .with_amount(AmountFixtures::small_claim())
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &policy,
    );
    assert_eq!(processed[0].status, ClaimStatus::Approved);
    assert!(processed[0].validation_notes.contains("auto-approved"));
}

#[test]
fn test_large_amount_approves_with_review_note() {
    let policy = ValidationPolicy {
        auto_approve_threshold: AmountFixtures::threshold(),
        ..Default::default()
    };
    let processed = run(
        vec![ClaimBuilder::new()
            .with_amount(AmountFixtures::large_claim())
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &policy,
    );
    assert_eq!(processed[0].status, ClaimStatus::Approved);
    assert!(processed[0].validation_notes.contains("manual review"));
}

#[test]
fn test_scenario_d_capacity_contention_is_order_sensitive() {
    let mut providers = provider_map(vec![ProviderBuilder::new().with_capacity(1).build()]);
    let processed = run(
        vec![
            ClaimBuilder::new().with_id("C001").build(),
            ClaimBuilder::new().with_id("C002").build(),
        ],
        vec![WarrantyBuilder::new().build()],
        &mut providers,
        &ValidationPolicy::default(),
    );

    // First claim in input order takes the single slot
    assert_eq!(processed[0].status, ClaimStatus::InProgress);
    assert_eq!(
        processed[0].service_provider,
        Some(ProviderId::new("SP001"))
    );
    assert_eq!(processed[1].status, ClaimStatus::Approved);
    assert!(processed[1].service_provider.is_none());
    assert_eq!(providers[&ProviderId::new("SP001")].active_claims, 1);
}

#[test]
fn test_scenario_e_unresolved_warranty_denies() {
    let processed = run(
        vec![ClaimBuilder::new().with_warranty("W-MISSING").build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed[0].coverage_status, Some(CoverageStatus::Invalid));
    assert_eq!(processed[0].status, ClaimStatus::Denied);
}

#[test]
fn test_sources_feed_a_full_run() {
    let source = InMemorySource::new()
        .with_warranty(WarrantyBuilder::new().build())
        .with_provider(ProviderBuilder::new().build())
        .with_claim(
            ClaimBuilder::new()
                .with_amount(AmountFixtures::small_claim())
                .build(),
        );

    let warranties = source.load_warranties().unwrap();
    let mut providers = source.load_providers().unwrap();
    let claims = source.load_claims().unwrap();

    let processed = process_claims(claims, &warranties, &mut providers, &ValidationPolicy::default())
        .unwrap();
    let analytics = generate_analytics(&processed, &warranties, &providers);

    assert_eq!(processed[0].status, ClaimStatus::InProgress);
    assert_eq!(analytics.total_claims, 1);
    assert_eq!(analytics.total_warranties, 1);
}

// A loader whose backing file is missing or malformed; both failure kinds
// abort the run before any claim is touched.
struct BrokenRegistry;

impl WarrantySource for BrokenRegistry {
    fn load_warranties(&self) -> Result<BTreeMap<WarrantyId, WarrantyRecord>, PipelineError> {
        Err(CoreError::data_source("warranty registry not found").into())
    }
}

impl ClaimSource for BrokenRegistry {
    fn load_claims(&self) -> Result<Vec<Claim>, PipelineError> {
        Err(CoreError::schema("claim_date column missing").into())
    }
}

#[test]
fn test_loader_failures_surface_with_distinct_kinds() {
    assert!(matches!(
        BrokenRegistry.load_warranties().unwrap_err(),
        PipelineError::DataSource(_)
    ));
    assert!(matches!(
        BrokenRegistry.load_claims().unwrap_err(),
        PipelineError::Schema(_)
    ));
}

#[test]
fn test_reprocessing_output_is_idempotent() {
    let warranties = warranty_map(vec![WarrantyBuilder::new().build()]);
    let mut providers = provider_map(vec![ProviderBuilder::new().build()]);
    let policy = ValidationPolicy::default();

    let claims = vec![
        ClaimBuilder::new().with_id("C001").build(),
        ClaimBuilder::new()
            .with_id("C002")
            .with_warranty("W-MISSING")
            .build(),
    ];

    let first = process_claims(claims, &warranties, &mut providers, &policy).unwrap();
    let statuses: Vec<ClaimStatus> = first.iter().map(|c| c.status).collect();
    let notes: Vec<String> = first.iter().map(|c| c.validation_notes.clone()).collect();

    let second = process_claims(first, &warranties, &mut providers, &policy).unwrap();
    let statuses_after: Vec<ClaimStatus> = second.iter().map(|c| c.status).collect();
    let notes_after: Vec<String> = second.iter().map(|c| c.validation_notes.clone()).collect();

    assert_eq!(statuses, statuses_after);
    assert_eq!(notes, notes_after);
    // The assigned claim did not book capacity twice
    assert_eq!(providers[&ProviderId::new("SP001")].active_claims, 1);
}

#[test]
fn test_deferral_note_recorded_once_across_runs() {
    let warranties = warranty_map(vec![WarrantyBuilder::new().build()]);
    let mut providers = provider_map(vec![ProviderBuilder::new()
        .with_capacity(1)
        .with_active_claims(1)
        .build()]);
    let policy = ValidationPolicy::default();

    let first = process_claims(
        vec![ClaimBuilder::new().build()],
        &warranties,
        &mut providers,
        &policy,
    )
    .unwrap();
    assert_eq!(first[0].status, ClaimStatus::Approved);
    let notes = first[0].validation_notes.clone();
    assert_eq!(notes.matches("deferred").count(), 1);

    // Capacity is still exhausted, so the second run defers again
    let second = process_claims(first, &warranties, &mut providers, &policy).unwrap();
    assert_eq!(second[0].status, ClaimStatus::Approved);
    assert_eq!(second[0].validation_notes, notes);
}

#[test]
fn test_deferred_claim_assigned_on_later_run() {
    let warranties = warranty_map(vec![WarrantyBuilder::new().build()]);
    let mut providers = provider_map(vec![ProviderBuilder::new().with_capacity(1).build()]);
    let policy = ValidationPolicy::default();

    let claims = vec![
        ClaimBuilder::new().with_id("C001").build(),
        ClaimBuilder::new().with_id("C002").build(),
    ];
    let first = process_claims(claims, &warranties, &mut providers, &policy).unwrap();
    assert_eq!(first[1].status, ClaimStatus::Approved);

    // Service on the first claim finishes, freeing the slot
    providers
        .get_mut(&ProviderId::new("SP001"))
        .unwrap()
        .finish_claim()
        .unwrap();

    let second = process_claims(first, &warranties, &mut providers, &policy).unwrap();
    assert_eq!(second[1].status, ClaimStatus::InProgress);
    assert_eq!(
        second[1].service_provider,
        Some(ProviderId::new("SP001"))
    );
}

#[test]
fn test_area_restricted_provider_skipped_for_other_claims() {
    let mut providers = provider_map(vec![
        ProviderBuilder::new()
            .with_id("SP001")
            .with_service_areas(["plumbing"])
            .build(),
        ProviderBuilder::new()
            .with_id("SP002")
            .with_service_areas(["electronics"])
            .build(),
    ]);
    let processed = run(
        vec![ClaimBuilder::new()
            .with_coverage_type(domain_warranty::CoverageType::Electronics)
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut providers,
        &ValidationPolicy::default(),
    );
    assert_eq!(
        processed[0].service_provider,
        Some(ProviderId::new("SP002"))
    );
}

#[test]
fn test_cancelled_claim_untouched_by_run() {
    let mut cancelled = ClaimBuilder::new().build();
    cancelled.cancel().unwrap();

    let processed = run(
        vec![cancelled],
        vec![WarrantyBuilder::new().build()],
        &mut provider_map(vec![ProviderBuilder::new().build()]),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed[0].status, ClaimStatus::Cancelled);
    assert!(processed[0].service_provider.is_none());
}

#[test]
fn test_type_mismatch_denied_when_policy_enabled() {
    let policy = ValidationPolicy {
        validate_coverage_type: true,
        ..Default::default()
    };
    let processed = run(
        vec![ClaimBuilder::new()
            .with_coverage_type(domain_warranty::CoverageType::Electronics)
            .build()],
        vec![WarrantyBuilder::new()
            .with_coverage_type(domain_warranty::CoverageType::Parts)
            .build()],
        &mut BTreeMap::new(),
        &policy,
    );
    assert_eq!(
        processed[0].coverage_status,
        Some(CoverageStatus::NotCovered)
    );
    assert_eq!(processed[0].status, ClaimStatus::Denied);
}

#[test]
fn test_claim_dated_on_start_is_covered() {
    let processed = run(
        vec![ClaimBuilder::new()
            .with_date(TemporalFixtures::warranty_start())
            .build()],
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed[0].coverage_status, Some(CoverageStatus::Covered));
}

#[test]
fn test_mixed_batch_never_errors() {
    let claims = vec![
        ClaimBuilder::new().with_id("C001").build(),
        ClaimBuilder::new()
            .with_id("C002")
            .with_warranty("W-GONE")
            .build(),
        ClaimBuilder::new()
            .with_id("C003")
            .with_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .build(),
        ClaimBuilder::new()
            .with_id("C004")
            .with_amount(dec!(9999.00))
            .build(),
    ];
    let processed = run(
        claims,
        vec![WarrantyBuilder::new().build()],
        &mut BTreeMap::new(),
        &ValidationPolicy::default(),
    );
    assert_eq!(processed.len(), 4);
    assert!(processed.iter().all(|c| c.coverage_status.is_some()));
    assert!(processed.iter().all(|c| !c.validation_notes.is_empty()));
}
