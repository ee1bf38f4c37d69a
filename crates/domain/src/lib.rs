//! Pinball Ads Domain - placements, request parameters, and the rewarded-ad
//! state machine.
//!
//! This crate is pure: no runtime, no I/O, no logging. Everything that talks
//! to an ad network or a game loop lives in `pinball-ads-engine`.

extern crate self as pinball_ads_domain;

pub mod ad_request;
pub mod error;
pub mod events;
pub mod placement;
pub mod rewarded;
pub mod value_objects;

pub use ad_request::{AdRequest, AdRequestProfile, SIMULATOR_TEST_DEVICE};
pub use error::DomainError;
pub use events::{AdEvent, Emission, Rejection, RewardedNotification};
pub use placement::Placement;
pub use rewarded::{transition, RewardedInput, RewardedState, Transition};
pub use value_objects::{
    AdUnitId, ChildDirectedTreatment, ConsentStatus, PlacementName, Reward,
};
