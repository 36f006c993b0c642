//! Core error types used across the system
//!
//! These are the fatal error kinds: a run either fails with one of these
//! before producing output, or completes. Per-claim data problems (missing
//! warranty, expired coverage, exhausted capacity) are modeled as data on
//! the claim itself and never surface here.

use crate::temporal::TemporalError;
use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn data_source(message: impl Into<String>) -> Self {
        CoreError::DataSource(message.into())
    }

    pub fn schema(message: impl Into<String>) -> Self {
        CoreError::Schema(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
