//! Warranty Claims Pipeline
//!
//! The orchestrator over the claim domain crates: it sequences coverage
//! validation, status progression, and provider assignment over a full claim
//! collection, then reduces the result into an analytics snapshot.
//!
//! # Data Flow
//!
//! ```text
//! loaders -> {warranty_id -> WarrantyRecord}
//!            {provider_id -> ServiceProvider}
//!            ordered Vec<Claim> (Submitted)
//!                     |
//!                     v
//!   per claim, in input order:
//!     validate coverage -> advance status -> assign provider if approved
//!                     |
//!                     v
//!   generate_analytics(processed claims, warranties, providers)
//! ```
//!
//! The run is a single-threaded, single-pass batch: claims are processed
//! strictly in input order because capacity accounting is order-sensitive.
//! A run either completes and returns the full processed set or fails with
//! a configuration/data-source error before producing any output.

pub mod analytics;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use analytics::{generate_analytics, ProviderPerformance, WarrantyAnalytics};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::process_claims;
pub use ports::{ClaimSource, InMemorySource, ProviderSource, WarrantySource};
