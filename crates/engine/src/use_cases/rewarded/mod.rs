//! Rewarded-ad use cases.

mod coordinator;
mod error;

pub use coordinator::RewardedAdCoordinator;
pub use error::RewardedAdError;
