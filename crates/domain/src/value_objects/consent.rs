//! Data-privacy consent and child-directed treatment.
//!
//! Both feed into every ad request the client builds (see [`crate::ad_request`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

// ============================================================================
// Consent Status
// ============================================================================

/// The player's data-privacy consent for personalized ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    /// The player has not been asked yet. The network serves personalized ads.
    #[default]
    Unknown,
    Granted,
    /// Consent explicitly denied; requests ask for non-personalized ads only.
    Revoked,
}

impl ConsentStatus {
    /// Whether requests must be flagged as non-personalized.
    #[inline]
    pub fn requires_non_personalized(self) -> bool {
        matches!(self, Self::Revoked)
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsentStatus::Unknown => write!(f, "unknown"),
            ConsentStatus::Granted => write!(f, "granted"),
            ConsentStatus::Revoked => write!(f, "revoked"),
        }
    }
}

impl FromStr for ConsentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" | "" => Ok(ConsentStatus::Unknown),
            "granted" | "grant" | "yes" => Ok(ConsentStatus::Granted),
            "revoked" | "revoke" | "denied" | "no" => Ok(ConsentStatus::Revoked),
            other => Err(DomainError::parse(format!(
                "Unknown consent status: {}",
                other
            ))),
        }
    }
}

// ============================================================================
// Child-Directed Treatment
// ============================================================================

/// COPPA-style child-directed tagging for ad requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildDirectedTreatment {
    /// Leave the request untagged.
    #[default]
    Unspecified,
    Yes,
    No,
}

impl ChildDirectedTreatment {
    /// The tag value to put on a request, if any.
    pub fn as_tag(self) -> Option<bool> {
        match self {
            Self::Unspecified => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }
}
