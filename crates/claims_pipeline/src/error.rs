//! Pipeline errors
//!
//! Only the fatal tier lives here: configuration and data-source problems
//! that abort a run before it produces output. Per-claim problems are data
//! on the claim (coverage status, validation notes) and never raise.

use thiserror::Error;

use core_kernel::CoreError;
use domain_claims::ClaimError;

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

impl From<ClaimError> for PipelineError {
    fn from(err: ClaimError) -> Self {
        // The only claim error reachable from the orchestrator is a
        // malformed policy; everything per-claim is modeled as data.
        PipelineError::Configuration(err.to_string())
    }
}

impl From<CoreError> for PipelineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DataSource(msg) => PipelineError::DataSource(msg),
            CoreError::Schema(msg) => PipelineError::Schema(msg),
            other => PipelineError::Configuration(other.to_string()),
        }
    }
}

impl From<::config::ConfigError> for PipelineError {
    fn from(err: ::config::ConfigError) -> Self {
        PipelineError::Configuration(err.to_string())
    }
}
