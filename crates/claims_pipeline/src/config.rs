//! Pipeline configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_claims::ValidationPolicy;

use crate::error::PipelineError;

/// Pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Reject claims dated outside the warranty coverage window
    pub require_active_warranty: bool,
    /// Match claim coverage types against warranty tags
    pub validate_coverage_type: bool,
    /// Auto-approval threshold for claim amounts
    pub auto_approve_threshold: Decimal,
    /// Log level
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let policy = ValidationPolicy::default();
        Self {
            require_active_warranty: policy.require_active_warranty,
            validate_coverage_type: policy.validate_coverage_type,
            auto_approve_threshold: policy.auto_approve_threshold,
            log_level: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from `CLAIMS_`-prefixed environment variables
    pub fn from_env() -> Result<Self, PipelineError> {
        let cfg: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS"))
            .build()?
            .try_deserialize()?;
        cfg.policy()?;
        Ok(cfg)
    }

    /// Converts into a validated policy object
    pub fn policy(&self) -> Result<ValidationPolicy, PipelineError> {
        let policy = ValidationPolicy {
            require_active_warranty: self.require_active_warranty,
            validate_coverage_type: self.validate_coverage_type,
            auto_approve_threshold: self.auto_approve_threshold,
        };
        policy.validate()?;
        Ok(policy)
    }
}
