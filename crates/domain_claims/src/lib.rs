//! Claims Domain
//!
//! This crate implements the warranty-claim lifecycle from submission through
//! coverage validation, approval, and service completion.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> Validated -> Approved -> InProgress -> Completed
//!                  \-> Denied                  (terminal)
//!        any non-terminal -> Cancelled         (terminal)
//! ```

pub mod claim;
pub mod error;
pub mod policy;
pub mod status;
pub mod validation;

pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use policy::ValidationPolicy;
pub use status::advance_status;
pub use validation::{validate_coverage, CoverageStatus};
