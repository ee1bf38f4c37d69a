//! Ad network and placement configuration ports.

use pinball_ads_domain::{AdRequest, AdUnitId, Placement};

// =============================================================================
// Ad Network
// =============================================================================

/// The network's single rewarded-ad object.
///
/// Calls are fire-and-forget. Outcomes come back as
/// [`AdEvent`](pinball_ads_domain::AdEvent)s pushed through the
/// [`AdEventSender`](crate::infrastructure::event_queue::AdEventSender) the
/// backend was built with, from whatever thread the SDK uses.
#[cfg_attr(test, mockall::automock)]
pub trait AdNetworkBackend: Send + Sync {
    /// Start loading an ad for `unit_id`. Replaces whatever was loaded before.
    fn load_ad(&self, unit_id: &AdUnitId, request: &AdRequest);

    /// Display the loaded ad.
    fn show(&self);

    fn is_loaded(&self) -> bool;
}

// =============================================================================
// Placement Configuration
// =============================================================================

/// Resolves placements to network ad-unit IDs.
#[cfg_attr(test, mockall::automock)]
pub trait PlacementConfig: Send + Sync {
    /// `None` when the placement is not configured (missing or blank ID).
    fn rewarded_unit_id(&self, placement: &Placement) -> Option<AdUnitId>;
}
