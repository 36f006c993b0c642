//! Validation policy
//!
//! The knobs that govern coverage validation and auto-approval. Loaded by
//! the configuration layer; a malformed policy is a fatal configuration
//! error, surfaced before any claim is processed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Policy governing coverage validation and approval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject claims dated outside the warranty coverage window
    pub require_active_warranty: bool,
    /// Match the claim's coverage type against the warranty's tag
    pub validate_coverage_type: bool,
    /// Claim amount at or below which approval skips manual review
    pub auto_approve_threshold: Decimal,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_active_warranty: true,
            validate_coverage_type: false,
            auto_approve_threshold: dec!(500.00),
        }
    }
}

impl ValidationPolicy {
    /// Validates policy values; a negative threshold is malformed
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.auto_approve_threshold.is_sign_negative() {
            return Err(ClaimError::InvalidPolicy(format!(
                "auto_approve_threshold must be non-negative, got {}",
                self.auto_approve_threshold
            )));
        }
        Ok(())
    }
}
