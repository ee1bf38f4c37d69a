//! Domain Events
//!
//! - `network_events`: what the ad network reports, unattributed
//! - `rewarded_events`: what the rewarded-ad state machine emits in response

pub mod network_events;
pub mod rewarded_events;

pub use network_events::AdEvent;
pub use rewarded_events::{Emission, Rejection, RewardedNotification};
