//! Rewarded-ad lifecycle.
//!
//! The network keeps one rewarded-ad object for the whole app. Placements take
//! turns owning it: [`RewardedState`] records the current owner and
//! [`transition`] is the only way to move between states.

mod state;
mod transitions;

pub use state::RewardedState;
pub use transitions::{transition, RewardedInput, Transition};
