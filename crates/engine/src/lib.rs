//! Pinball Ads Engine library.
//!
//! Runtime side of the rewarded-ad client: the coordinator the game talks to,
//! and the adapters it is wired to.
//!
//! ## Structure
//!
//! - `use_cases/` - The rewarded-ad coordinator
//! - `infrastructure/` - Ports, the event queue, settings and adapters

pub mod infrastructure;
pub mod use_cases;

/// Recording ports for tests.
#[cfg(test)]
pub mod test_fixtures;

/// Flows against the simulated ad network.
#[cfg(test)]
mod e2e_tests;

pub use use_cases::{RewardedAdCoordinator, RewardedAdError};
