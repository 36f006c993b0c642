//! Test data builders
//!
//! Builder patterns for constructing warranty, claim, and provider test data
//! with sensible defaults, so tests only spell out the relevant fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, CustomerId, ProductId, ProviderId, WarrantyId};
use domain_claims::Claim;
use domain_provider::ServiceProvider;
use domain_warranty::{CoverageType, WarrantyRecord};

use crate::fixtures::TemporalFixtures;

/// Builder for warranty records
pub struct WarrantyBuilder {
    warranty_id: WarrantyId,
    customer_id: CustomerId,
    product_id: ProductId,
    purchase_date: NaiveDate,
    warranty_start_date: NaiveDate,
    warranty_duration_months: u32,
    coverage_type: Option<CoverageType>,
}

impl Default for WarrantyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WarrantyBuilder {
    /// A 12-month warranty starting 2024-01-01
    pub fn new() -> Self {
        Self {
            warranty_id: WarrantyId::new("W001"),
            customer_id: CustomerId::new("CUST01"),
            product_id: ProductId::new("PROD01"),
            purchase_date: TemporalFixtures::warranty_start(),
            warranty_start_date: TemporalFixtures::warranty_start(),
            warranty_duration_months: 12,
            coverage_type: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.warranty_id = WarrantyId::new(id);
        self
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.purchase_date = start;
        self.warranty_start_date = start;
        self
    }

    pub fn with_duration_months(mut self, months: u32) -> Self {
        self.warranty_duration_months = months;
        self
    }

    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.coverage_type = Some(coverage_type);
        self
    }

    pub fn build(self) -> WarrantyRecord {
        WarrantyRecord::new(
            self.warranty_id,
            self.customer_id,
            self.product_id,
            self.purchase_date,
            self.warranty_start_date,
            self.warranty_duration_months,
            self.coverage_type,
        )
        .expect("builder defaults satisfy warranty invariants")
    }
}

/// Builder for submitted claims
pub struct ClaimBuilder {
    claim_id: ClaimId,
    warranty_id: WarrantyId,
    claim_date: NaiveDate,
    issue_description: String,
    claim_amount: Option<Decimal>,
    coverage_type: Option<CoverageType>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// A claim against warranty W001, dated mid-window, with no amount
    pub fn new() -> Self {
        Self {
            claim_id: ClaimId::new("C001"),
            warranty_id: WarrantyId::new("W001"),
            claim_date: TemporalFixtures::mid_warranty_claim_date(),
            issue_description: "unit stopped working".to_string(),
            claim_amount: None,
            coverage_type: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.claim_id = ClaimId::new(id);
        self
    }

    pub fn with_warranty(mut self, id: impl Into<String>) -> Self {
        self.warranty_id = WarrantyId::new(id);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.claim_date = date;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = Some(amount);
        self
    }

    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.coverage_type = Some(coverage_type);
        self
    }

    pub fn build(self) -> Claim {
        let claim = Claim::submitted(
            self.claim_id,
            self.warranty_id,
            self.claim_date,
            self.issue_description,
            self.claim_amount,
        )
        .expect("builder defaults satisfy claim invariants");
        match self.coverage_type {
            Some(coverage_type) => claim.with_coverage_type(coverage_type),
            None => claim,
        }
    }
}

/// Builder for service providers
pub struct ProviderBuilder {
    provider_id: ProviderId,
    provider_name: String,
    service_areas: Vec<String>,
    capacity: Option<u32>,
    active_claims: u32,
}

impl Default for ProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderBuilder {
    /// An unconstrained provider: any area, unlimited capacity, idle
    pub fn new() -> Self {
        Self {
            provider_id: ProviderId::new("SP001"),
            provider_name: "Acme Repairs".to_string(),
            service_areas: Vec::new(),
            capacity: None,
            active_claims: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.provider_id = ProviderId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    pub fn with_service_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_active_claims(mut self, active: u32) -> Self {
        self.active_claims = active;
        self
    }

    pub fn build(self) -> ServiceProvider {
        let mut provider = ServiceProvider::new(self.provider_id, self.provider_name)
            .with_service_areas(self.service_areas)
            .with_active_claims(self.active_claims);
        provider.capacity = self.capacity;
        provider
    }
}
