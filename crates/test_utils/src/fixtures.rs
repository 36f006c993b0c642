//! Pre-built test fixtures
//!
//! Consistent, predictable values for the common test setup: a warranty
//! year starting 2024-01-01, a mid-year claim date, and standard amounts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard warranty start (Jan 1, 2024)
    pub fn warranty_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// A claim date well inside the standard 12-month window
    pub fn mid_warranty_claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// The exact end boundary of the standard 12-month window
    pub fn warranty_end_boundary() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }
}

/// Fixture for amount test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// An amount comfortably under the default auto-approve threshold
    pub fn small_claim() -> Decimal {
        dec!(20.00)
    }

    /// An amount over the default auto-approve threshold
    pub fn large_claim() -> Decimal {
        dec!(900.00)
    }

    /// The default auto-approve threshold used in scenario tests
    pub fn threshold() -> Decimal {
        dec!(50.00)
    }
}
