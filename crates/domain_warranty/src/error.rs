//! Warranty domain errors

use chrono::NaiveDate;
use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur in the warranty domain
#[derive(Debug, Error)]
pub enum WarrantyError {
    #[error("Warranty start {start} precedes purchase date {purchase}")]
    StartBeforePurchase { start: NaiveDate, purchase: NaiveDate },

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}
