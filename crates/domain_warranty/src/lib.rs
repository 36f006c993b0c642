//! Warranty Domain
//!
//! This crate models product warranties: the immutable warranty record loaded
//! from an external registry, the coverage-type tag attached to it, and the
//! calendar coverage window derived from its start date and duration.

pub mod coverage;
pub mod error;
pub mod warranty;

pub use coverage::CoverageType;
pub use error::WarrantyError;
pub use warranty::WarrantyRecord;
