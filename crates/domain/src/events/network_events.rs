//! Raw notifications raised by the ad network.

use serde::{Deserialize, Serialize};

use crate::value_objects::Reward;

/// An event raised by the network for "the current ad".
///
/// The network has a single rewarded-ad object; none of these events say which
/// placement they belong to. Attribution is the coordinator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdEvent {
    Loaded,
    FailedToLoad { reason: String },
    Opened,
    Started,
    Rewarded { reward: Reward },
    Closed,
    LeftApplication,
}

impl AdEvent {
    pub fn failed_to_load(reason: impl Into<String>) -> Self {
        Self::FailedToLoad {
            reason: reason.into(),
        }
    }

    pub fn rewarded(reward: Reward) -> Self {
        Self::Rewarded { reward }
    }

    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::FailedToLoad { .. } => "failed_to_load",
            Self::Opened => "opened",
            Self::Started => "started",
            Self::Rewarded { .. } => "rewarded",
            Self::Closed => "closed",
            Self::LeftApplication => "left_application",
        }
    }
}
