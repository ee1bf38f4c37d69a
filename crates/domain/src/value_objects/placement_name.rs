//! Custom placement name
//!
//! A newtype for the opaque key that identifies a custom rewarded-ad slot
//! (e.g. `"lvl2"`, `"extra_ball"`).
//!
//! # Tier Classification
//!
//! - **Tier 2: Validated Newtype** - Wraps `String` with validation rules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Name of a custom placement (validated newtype)
///
/// # Validation Rules
///
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - Must not be the reserved word `default` (any case); the default slot is
///   [`Placement::Default`](crate::Placement::Default), never a named one
///
/// # Examples
///
/// ```
/// use pinball_ads_domain::value_objects::PlacementName;
///
/// let name = PlacementName::new("  lvl2 ").unwrap();
/// assert_eq!(name.as_str(), "lvl2");
///
/// assert!(PlacementName::new("   ").is_err());
/// assert!(PlacementName::new("Default").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlacementName(String);

impl PlacementName {
    /// Word reserved for the default placement.
    pub const RESERVED: &'static str = "default";

    /// Create a new `PlacementName`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is empty or reserved.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Placement name cannot be empty"));
        }

        if trimmed.eq_ignore_ascii_case(Self::RESERVED) {
            return Err(DomainError::validation(format!(
                "Placement name '{}' is reserved for the default placement",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlacementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlacementName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PlacementName> for String {
    fn from(name: PlacementName) -> Self {
        name.0
    }
}

impl TryFrom<String> for PlacementName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlacementName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
