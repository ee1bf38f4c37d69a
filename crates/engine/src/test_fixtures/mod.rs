//! Recording port implementations shared by unit and flow tests.
//!
//! Mockall mocks are the first choice when a test pins down exact calls.
//! These recorders suit tests that assert on the full ordered sequence of
//! what reached the game or the log.

mod recorders;

pub use recorders::{RecordingDiagnosticLog, RecordingEventSink};
