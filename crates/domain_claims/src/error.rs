//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Invalid claim amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid validation policy: {0}")]
    InvalidPolicy(String),
}
