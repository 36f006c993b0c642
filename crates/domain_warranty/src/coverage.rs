//! Coverage type tags
//!
//! Warranties optionally carry a coverage-type tag describing what kind of
//! failure they cover. Claims may carry the same tag, attached by the loader
//! from the issue description. Matching is equality on the canonical tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of warranty coverage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageType {
    /// Replacement parts
    Parts,
    /// Repair labor
    Labor,
    /// Electronics and electrical faults
    Electronics,
    /// Major appliance coverage
    Appliance,
    /// Accidental damage
    Accidental,
    /// Extended manufacturer coverage
    Extended,
    /// Source-specific tag with no canonical kind
    Other(String),
}

impl CoverageType {
    /// Parses a loader-supplied tag, case-insensitively
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "parts" => CoverageType::Parts,
            "labor" | "labour" => CoverageType::Labor,
            "electronics" => CoverageType::Electronics,
            "appliance" => CoverageType::Appliance,
            "accidental" => CoverageType::Accidental,
            "extended" => CoverageType::Extended,
            other => CoverageType::Other(other.to_string()),
        }
    }

    /// Returns the canonical lowercase tag
    pub fn tag(&self) -> &str {
        match self {
            CoverageType::Parts => "parts",
            CoverageType::Labor => "labor",
            CoverageType::Electronics => "electronics",
            CoverageType::Appliance => "appliance",
            CoverageType::Accidental => "accidental",
            CoverageType::Extended => "extended",
            CoverageType::Other(tag) => tag,
        }
    }

    /// Whether a claimed type satisfies this warranty's coverage.
    ///
    /// Presence-only matching: a claim with no attached type (`None`) is
    /// accepted against any warranty type. This is the documented default
    /// when no explicit issue-to-coverage mapping exists.
    pub fn accepts(&self, claimed: Option<&CoverageType>) -> bool {
        match claimed {
            None => true,
            Some(claimed) => self == claimed,
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
