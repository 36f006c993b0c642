//! Property-based test generators
//!
//! Proptest strategies producing domain values that respect the loader-level
//! invariants (non-negative amounts, day-of-month 1-28 so every month is
//! valid, warranty start never before purchase).

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{ClaimStatus, CoverageStatus};

/// Strategy for dates within the test horizon, days 1-28 only
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for optional non-negative claim amounts (in cents)
pub fn claim_amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Strategy for warranty durations in months
pub fn duration_strategy() -> impl Strategy<Value = u32> {
    0u32..120
}

/// Strategy over all claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    proptest::sample::select(ClaimStatus::all().to_vec())
}

/// Strategy over all coverage verdicts
pub fn coverage_status_strategy() -> impl Strategy<Value = CoverageStatus> {
    proptest::sample::select(CoverageStatus::all().to_vec())
}
