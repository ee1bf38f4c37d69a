//! Rewarded-ad request errors.

use pinball_ads_domain::{Placement, Rejection};

/// Why a load or show request was not carried out.
///
/// Both variants are local to the request: the coordinator state is left
/// exactly as it was and later requests proceed normally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewardedAdError {
    /// No ad-unit ID is configured for the placement.
    #[error("Attempting to load a rewarded ad with an undefined ID at placement {placement}")]
    MissingAdUnitId { placement: Placement },

    /// The single ad object is busy (loading for someone else, or playing).
    #[error("Rewarded ad request rejected: {0}")]
    Conflict(Rejection),
}

impl RewardedAdError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingAdUnitId { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// The placement the failed request was for.
    pub fn placement(&self) -> &Placement {
        match self {
            Self::MissingAdUnitId { placement } => placement,
            Self::Conflict(rejection) => rejection.requested(),
        }
    }
}
