//! Loader ports
//!
//! The pipeline consumes three record sets from external loaders: the
//! warranty registry, the provider roster, and the ordered claim intake.
//! File formats and column mapping live behind these traits; the pipeline
//! only sees keyed maps and an ordered claim sequence. Loaders fail with
//! `DataSource` (missing/unreadable source) or `Schema` (required columns
//! absent) error kinds.

use std::collections::BTreeMap;

use core_kernel::{ProviderId, WarrantyId};
use domain_claims::Claim;
use domain_provider::ServiceProvider;
use domain_warranty::WarrantyRecord;

use crate::error::PipelineError;

/// Source of warranty records, keyed by warranty id
pub trait WarrantySource {
    fn load_warranties(&self) -> Result<BTreeMap<WarrantyId, WarrantyRecord>, PipelineError>;
}

/// Source of service providers, keyed by provider id.
/// An empty roster is valid; approved claims then stay unassigned.
pub trait ProviderSource {
    fn load_providers(&self) -> Result<BTreeMap<ProviderId, ServiceProvider>, PipelineError>;
}

/// Source of submitted claims, in intake order
pub trait ClaimSource {
    fn load_claims(&self) -> Result<Vec<Claim>, PipelineError>;
}

/// In-memory source backing tests and embedded callers
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    pub warranties: BTreeMap<WarrantyId, WarrantyRecord>,
    pub providers: BTreeMap<ProviderId, ServiceProvider>,
    pub claims: Vec<Claim>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warranty(mut self, warranty: WarrantyRecord) -> Self {
        self.warranties.insert(warranty.warranty_id.clone(), warranty);
        self
    }

    pub fn with_provider(mut self, provider: ServiceProvider) -> Self {
        self.providers.insert(provider.provider_id.clone(), provider);
        self
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }
}

impl WarrantySource for InMemorySource {
    fn load_warranties(&self) -> Result<BTreeMap<WarrantyId, WarrantyRecord>, PipelineError> {
        Ok(self.warranties.clone())
    }
}

impl ProviderSource for InMemorySource {
    fn load_providers(&self) -> Result<BTreeMap<ProviderId, ServiceProvider>, PipelineError> {
        Ok(self.providers.clone())
    }
}

impl ClaimSource for InMemorySource {
    fn load_claims(&self) -> Result<Vec<Claim>, PipelineError> {
        Ok(self.claims.clone())
    }
}
