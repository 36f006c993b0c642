//! Warranty record aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CoveragePeriod, CustomerId, ProductId, WarrantyId};

use crate::coverage::CoverageType;
use crate::error::WarrantyError;

/// A product warranty as loaded from the warranty registry
///
/// Immutable once constructed: the pipeline reads warranties but never
/// mutates them during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyRecord {
    /// Unique identifier
    pub warranty_id: WarrantyId,
    /// Customer holding the warranty
    pub customer_id: CustomerId,
    /// Product covered
    pub product_id: ProductId,
    /// Date the product was purchased
    pub purchase_date: NaiveDate,
    /// Date coverage begins (never before purchase)
    pub warranty_start_date: NaiveDate,
    /// Coverage duration in calendar months
    pub warranty_duration_months: u32,
    /// Optional coverage-type tag
    pub coverage_type: Option<CoverageType>,
}

impl WarrantyRecord {
    /// Creates a warranty record, enforcing that coverage does not start
    /// before the purchase date.
    pub fn new(
        warranty_id: WarrantyId,
        customer_id: CustomerId,
        product_id: ProductId,
        purchase_date: NaiveDate,
        warranty_start_date: NaiveDate,
        warranty_duration_months: u32,
        coverage_type: Option<CoverageType>,
    ) -> Result<Self, WarrantyError> {
        if warranty_start_date < purchase_date {
            return Err(WarrantyError::StartBeforePurchase {
                start: warranty_start_date,
                purchase: purchase_date,
            });
        }
        Ok(Self {
            warranty_id,
            customer_id,
            product_id,
            purchase_date,
            warranty_start_date,
            warranty_duration_months,
            coverage_type,
        })
    }

    /// The half-open coverage window `[start, start + duration months)`
    pub fn coverage_period(&self) -> Result<CoveragePeriod, WarrantyError> {
        CoveragePeriod::from_months(self.warranty_start_date, self.warranty_duration_months)
            .map_err(WarrantyError::from)
    }

    /// Whether the warranty is in force on the given date
    pub fn is_active_on(&self, date: NaiveDate) -> Result<bool, WarrantyError> {
        Ok(self.coverage_period()?.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn warranty(duration_months: u32) -> WarrantyRecord {
        WarrantyRecord::new(
            WarrantyId::new("W001"),
            CustomerId::new("CUST01"),
            ProductId::new("PROD01"),
            date(2023, 12, 15),
            date(2024, 1, 1),
            duration_months,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_start_before_purchase_rejected() {
        let err = WarrantyRecord::new(
            WarrantyId::new("W002"),
            CustomerId::new("CUST01"),
            ProductId::new("PROD01"),
            date(2024, 2, 1),
            date(2024, 1, 1),
            12,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, WarrantyError::StartBeforePurchase { .. }));
    }

    #[test]
    fn test_active_within_window() {
        let w = warranty(12);
        assert!(w.is_active_on(date(2024, 1, 1)).unwrap());
        assert!(w.is_active_on(date(2024, 6, 1)).unwrap());
        assert!(!w.is_active_on(date(2025, 1, 1)).unwrap());
    }

    #[test]
    fn test_zero_duration_never_active() {
        let w = warranty(0);
        assert!(!w.is_active_on(date(2024, 1, 1)).unwrap());
    }
}
