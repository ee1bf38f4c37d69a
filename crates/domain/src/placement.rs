//! Rewarded-ad placements.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::PlacementName;
use crate::DomainError;

/// Printable name of the default placement in diagnostics.
pub const DEFAULT_PLACEMENT_PRINTABLE_NAME: &str = "[Default]";

/// A slot where a rewarded ad may be requested and shown.
///
/// `Default` is a sentinel distinct from every custom key: [`PlacementName`]
/// refuses the reserved word, so the two can never collide.
///
/// ```
/// use pinball_ads_domain::Placement;
///
/// let lvl2 = Placement::custom("lvl2").unwrap();
/// assert_ne!(lvl2, Placement::Default);
/// assert_eq!(lvl2, Placement::custom("lvl2").unwrap());
/// assert_eq!(Placement::Default.printable_name(), "[Default]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Default,
    Custom(PlacementName),
}

impl Placement {
    /// Build a custom placement from a raw key.
    pub fn custom(name: impl Into<String>) -> Result<Self, DomainError> {
        PlacementName::new(name).map(Self::Custom)
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// The custom key, or `None` for the default placement.
    pub fn custom_name(&self) -> Option<&PlacementName> {
        match self {
            Self::Default => None,
            Self::Custom(name) => Some(name),
        }
    }

    /// Human-readable name used in every diagnostic about this placement.
    pub fn printable_name(&self) -> &str {
        match self {
            Self::Default => DEFAULT_PLACEMENT_PRINTABLE_NAME,
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl From<PlacementName> for Placement {
    fn from(name: PlacementName) -> Self {
        Self::Custom(name)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.printable_name())
    }
}
