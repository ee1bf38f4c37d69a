//! Diagnostic log adapters.

use std::fmt::Arguments;

use crate::infrastructure::ports::{DiagnosticLog, LogLevel};

/// Delegates to the `tracing` crate. Assumes a subscriber is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticLog;

impl DiagnosticLog for TracingDiagnosticLog {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "pinball_ads_engine::rewarded", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "pinball_ads_engine::rewarded", "{}", args),
            LogLevel::Info => tracing::info!(target: "pinball_ads_engine::rewarded", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "pinball_ads_engine::rewarded", "{}", args),
            LogLevel::Error => tracing::error!(target: "pinball_ads_engine::rewarded", "{}", args),
        }
    }
}

/// Discards everything. For hosts that do their own reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnosticLog;

impl DiagnosticLog for NoOpDiagnosticLog {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapters_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingDiagnosticLog>();
        assert_send_sync::<NoOpDiagnosticLog>();
    }

    #[test]
    fn usable_as_trait_objects() {
        let logs: Vec<Box<dyn DiagnosticLog>> =
            vec![Box::new(TracingDiagnosticLog), Box::new(NoOpDiagnosticLog)];
        for log in logs {
            log.warn(format_args!("rewarded ad closed with no owner"));
        }
    }
}
