//! Consumer-facing rewarded-ad callbacks.

use pinball_ads_domain::{Placement, Reward};

/// Receives rewarded-ad callbacks on the coordinator's context.
///
/// Every method runs on the context that drains the coordinator's event
/// queue, in event arrival order, so implementations need no locking of
/// their own for game state they touch there. All methods default to no-ops.
#[cfg_attr(test, mockall::automock)]
pub trait RewardedAdEventSink: Send + Sync {
    fn on_loaded(&self) {}

    fn on_failed_to_load(&self, _reason: &str) {}

    fn on_opened(&self) {}

    fn on_started(&self) {}

    fn on_rewarded(&self, _reward: &Reward) {}

    /// The ad owned by `placement` was watched until a reward was granted.
    fn on_completed(&self, _placement: &Placement) {}

    /// The ad owned by `placement` closed without a reward.
    fn on_skipped(&self, _placement: &Placement) {}

    fn on_closed(&self) {}

    fn on_left_application(&self) {}
}
