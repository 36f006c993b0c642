//! Provider domain errors

use thiserror::Error;

/// Errors that can occur in the provider domain
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider {0} is at capacity ({1} active claims)")]
    AtCapacity(String, u32),

    #[error("Provider {0} has no active claims to finish")]
    NoActiveClaims(String),
}
