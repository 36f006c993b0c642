//! Service provider aggregate

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use core_kernel::ProviderId;

use crate::error::ProviderError;

/// A repair service provider
///
/// `active_claims` starts at whatever the loader supplied (providers may
/// already hold work from earlier runs) and is incremented by assignment.
/// The pipeline orchestrator is the sole mutator during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProvider {
    /// Unique identifier
    pub provider_id: ProviderId,
    /// Display name
    pub provider_name: String,
    /// Service-area tags; empty means the provider serves any area
    pub service_areas: BTreeSet<String>,
    /// Upper bound on concurrent claims; absent means unlimited
    pub capacity: Option<u32>,
    /// Claims currently in progress with this provider
    pub active_claims: u32,
}

impl ServiceProvider {
    pub fn new(provider_id: ProviderId, provider_name: impl Into<String>) -> Self {
        Self {
            provider_id,
            provider_name: provider_name.into(),
            service_areas: BTreeSet::new(),
            capacity: None,
            active_claims: 0,
        }
    }

    /// Restricts the provider to the given service areas
    pub fn with_service_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_areas = areas.into_iter().map(Into::into).collect();
        self
    }

    /// Caps concurrent claims
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Seeds the active-claim counter from loader data
    pub fn with_active_claims(mut self, active: u32) -> Self {
        self.active_claims = active;
        self
    }

    /// Whether the provider can take one more claim
    pub fn has_free_capacity(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.active_claims < capacity,
            None => true,
        }
    }

    /// Whether the provider serves a claim with the given area tags.
    /// An empty `service_areas` set is a wildcard; an empty tag set means
    /// no area information is available and every provider is eligible.
    pub fn serves(&self, tags: &BTreeSet<String>) -> bool {
        if self.service_areas.is_empty() || tags.is_empty() {
            return true;
        }
        self.service_areas.intersection(tags).next().is_some()
    }

    /// Takes on one claim, enforcing the capacity bound
    pub fn begin_claim(&mut self) -> Result<(), ProviderError> {
        if !self.has_free_capacity() {
            return Err(ProviderError::AtCapacity(
                self.provider_id.to_string(),
                self.active_claims,
            ));
        }
        self.active_claims += 1;
        Ok(())
    }

    /// Releases one claim after service completes
    pub fn finish_claim(&mut self) -> Result<(), ProviderError> {
        if self.active_claims == 0 {
            return Err(ProviderError::NoActiveClaims(self.provider_id.to_string()));
        }
        self.active_claims -= 1;
        Ok(())
    }
}
