use std::fmt::Arguments;
use std::sync::{Mutex, PoisonError};

use pinball_ads_domain::{Placement, Reward, RewardedNotification};

use crate::infrastructure::ports::{DiagnosticLog, LogLevel, RewardedAdEventSink};

/// Records every sink callback as a [`RewardedNotification`], in call order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    seen: Mutex<Vec<RewardedNotification>>,
}

impl RecordingEventSink {
    pub fn notifications(&self) -> Vec<RewardedNotification> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, predicate: impl Fn(&RewardedNotification) -> bool) -> usize {
        self.notifications().iter().filter(|n| predicate(n)).count()
    }

    fn push(&self, notification: RewardedNotification) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl RewardedAdEventSink for RecordingEventSink {
    fn on_loaded(&self) {
        self.push(RewardedNotification::Loaded);
    }

    fn on_failed_to_load(&self, reason: &str) {
        self.push(RewardedNotification::FailedToLoad {
            reason: reason.to_string(),
        });
    }

    fn on_opened(&self) {
        self.push(RewardedNotification::Opened);
    }

    fn on_started(&self) {
        self.push(RewardedNotification::Started);
    }

    fn on_rewarded(&self, reward: &Reward) {
        self.push(RewardedNotification::Rewarded {
            reward: reward.clone(),
        });
    }

    fn on_completed(&self, placement: &Placement) {
        self.push(RewardedNotification::Completed {
            placement: placement.clone(),
        });
    }

    fn on_skipped(&self, placement: &Placement) {
        self.push(RewardedNotification::Skipped {
            placement: placement.clone(),
        });
    }

    fn on_closed(&self) {
        self.push(RewardedNotification::Closed);
    }

    fn on_left_application(&self) {
        self.push(RewardedNotification::LeftApplication);
    }
}

/// Keeps formatted log lines with their level.
#[derive(Debug, Default)]
pub struct RecordingDiagnosticLog {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingDiagnosticLog {
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a line at exactly `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, line)| *l == level && line.contains(needle))
    }
}

impl DiagnosticLog for RecordingDiagnosticLog {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, args.to_string()));
    }
}
