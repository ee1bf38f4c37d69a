//! Event sink that reports every rewarded-ad callback through `tracing`.

use pinball_ads_domain::{Placement, Reward};

use crate::infrastructure::ports::RewardedAdEventSink;

/// Logs callbacks with structured fields. Used by the demo runner and handy
/// as a stand-in while the game UI is not wired yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl RewardedAdEventSink for TracingEventSink {
    fn on_loaded(&self) {
        tracing::info!("Rewarded ad loaded");
    }

    fn on_failed_to_load(&self, reason: &str) {
        tracing::warn!(reason = %reason, "Rewarded ad failed to load");
    }

    fn on_opened(&self) {
        tracing::debug!("Rewarded ad opened");
    }

    fn on_started(&self) {
        tracing::debug!("Rewarded ad started");
    }

    fn on_rewarded(&self, reward: &Reward) {
        tracing::info!(
            amount = reward.amount,
            reward_type = %reward.reward_type,
            "Rewarded ad granted reward"
        );
    }

    fn on_completed(&self, placement: &Placement) {
        tracing::info!(placement = %placement, "Rewarded ad completed");
    }

    fn on_skipped(&self, placement: &Placement) {
        tracing::info!(placement = %placement, "Rewarded ad skipped");
    }

    fn on_closed(&self) {
        tracing::debug!("Rewarded ad closed");
    }

    fn on_left_application(&self) {
        tracing::debug!("Rewarded ad left the application");
    }
}
