//! End-to-end rewarded-ad flows.
//!
//! These run the coordinator against the simulated ad network, the real
//! settings document and the event queue, the same wiring the `pinball-ads`
//! binary uses. Network latency is shortened to a millisecond.

mod helpers;
mod rewarded_flow_tests;
