//! Infrastructure implementations.
//!
//! Port traits plus the adapters behind them: the event queue, settings,
//! consent storage, the simulated ad network and the tracing-backed sinks.

pub mod consent_store;
pub mod diagnostics;
pub mod event_queue;
pub mod ports;
pub mod settings;
pub mod simulated_network;
pub mod tracing_sink;
