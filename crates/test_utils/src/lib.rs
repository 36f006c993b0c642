//! Shared Test Utilities
//!
//! Builders, fixtures, and proptest generators used across the workspace
//! test suites. Builders supply sensible defaults so tests specify only the
//! fields they care about.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::{ClaimBuilder, ProviderBuilder, WarrantyBuilder};
