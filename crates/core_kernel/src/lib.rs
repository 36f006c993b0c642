//! Core Kernel - Foundational types for the warranty claims system
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Strongly-typed identifiers for warranties, claims, and providers
//! - Calendar temporal types (month arithmetic, coverage periods, month keys)
//! - Common error kinds shared by loaders and the pipeline

pub mod error;
pub mod identifiers;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{ClaimId, CustomerId, ProductId, ProviderId, WarrantyId};
pub use temporal::{add_months, month_key, CoveragePeriod, TemporalError};
