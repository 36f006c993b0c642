//! Service Provider Domain
//!
//! This crate models repair service providers and the capacity-aware
//! assignment of approved claims to them. Assignment is order-sensitive:
//! earlier claims in the input sequence have first call on scarce capacity.

pub mod assignment;
pub mod error;
pub mod provider;

pub use assignment::assign_provider;
pub use error::ProviderError;
pub use provider::ServiceProvider;
