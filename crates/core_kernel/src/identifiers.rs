//! Strongly-typed identifiers for domain entities
//!
//! Warranty, claim, and provider records arrive from external sources keyed
//! by opaque string codes (e.g. `"W-1042"`). Newtype wrappers around those
//! codes prevent accidental mixing of different identifier kinds, such as
//! looking a claim id up in the warranty map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a loader-supplied code
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the underlying code
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(WarrantyId, "Identifies a warranty record");
define_id!(ClaimId, "Identifies a claim record");
define_id!(ProviderId, "Identifies a service provider");
define_id!(CustomerId, "Identifies the customer holding a warranty");
define_id!(ProductId, "Identifies the product a warranty covers");
