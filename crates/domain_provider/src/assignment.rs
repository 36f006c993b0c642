//! Capacity-aware provider assignment
//!
//! Selection is load-balancing with a deterministic tie-break: among
//! eligible providers with free capacity, pick the lowest `active_claims`,
//! breaking ties by `provider_id` ascending so identical inputs always
//! reproduce identical assignments.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use core_kernel::ProviderId;

use crate::provider::ServiceProvider;

/// Picks a provider for an approved claim and books the capacity.
///
/// Returns `None` when no eligible provider has free capacity; the claim
/// then stays approved and unassigned until a later run, which is a
/// recoverable outcome rather than an error.
pub fn assign_provider(
    providers: &mut BTreeMap<ProviderId, ServiceProvider>,
    area_tags: &BTreeSet<String>,
) -> Option<ProviderId> {
    let selected_id = providers
        .values()
        .filter(|p| p.serves(area_tags) && p.has_free_capacity())
        .min_by(|a, b| {
            a.active_claims
                .cmp(&b.active_claims)
                .then_with(|| a.provider_id.cmp(&b.provider_id))
        })
        .map(|p| p.provider_id.clone())?;

    let provider = providers.get_mut(&selected_id)?;
    // Capacity was checked during selection; nothing ran in between.
    provider.begin_claim().ok()?;
    debug!(provider_id = %selected_id, active = provider.active_claims, "provider assigned");
    Some(selected_id)
}
