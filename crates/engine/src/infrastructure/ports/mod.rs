//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The ad network SDK (could swap AdMob -> another network, or the simulator)
//! - Placement configuration (settings file, remote config)
//! - Consumer callbacks (game UI, reward granting)
//! - Consent persistence (file, platform key-value store)
//! - Diagnostics (tracing, silent, recording for tests)

mod consent;
mod diagnostics;
mod network;
mod sink;

pub use consent::{ConsentStore, ConsentStoreError};
pub use diagnostics::{DiagnosticLog, LogLevel};
pub use network::{AdNetworkBackend, PlacementConfig};
pub use sink::RewardedAdEventSink;

#[cfg(test)]
pub use consent::MockConsentStore;
#[cfg(test)]
pub use network::{MockAdNetworkBackend, MockPlacementConfig};
#[cfg(test)]
pub use sink::MockRewardedAdEventSink;
