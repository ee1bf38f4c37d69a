//! Use cases - User story orchestration.
//!
//! Each module coordinates ports for one game-facing feature.

pub mod rewarded;

pub use rewarded::{RewardedAdCoordinator, RewardedAdError};
