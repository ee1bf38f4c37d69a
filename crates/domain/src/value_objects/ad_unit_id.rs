//! Ad-unit identifier
//!
//! The network-issued ID a load request is made against, e.g.
//! `ca-app-pub-3940256099942544/5224354917`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Network ad-unit ID (validated newtype)
///
/// IDs are trimmed on construction; a blank ID is not an ID. Configuration
/// layers use [`AdUnitId::parse_optional`] to treat blank entries as
/// "not configured".
///
/// ```
/// use pinball_ads_domain::value_objects::AdUnitId;
///
/// let id = AdUnitId::new(" ca-app-pub-123/456 ").unwrap();
/// assert_eq!(id.as_str(), "ca-app-pub-123/456");
/// assert!(AdUnitId::parse_optional("  ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdUnitId(String);

impl AdUnitId {
    /// Create a new `AdUnitId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the ID is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Ad unit id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse an ID from configuration, treating blank values as absent.
    pub fn parse_optional(raw: &str) -> Option<Self> {
        Self::new(raw).ok()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AdUnitId> for String {
    fn from(id: AdUnitId) -> Self {
        id.0
    }
}

impl TryFrom<String> for AdUnitId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
