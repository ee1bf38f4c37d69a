//! Outcomes of rewarded-ad state transitions.

use serde::{Deserialize, Serialize};

use crate::value_objects::Reward;
use crate::Placement;

/// A consumer-visible callback, in the order it must be delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardedNotification {
    Loaded,
    FailedToLoad { reason: String },
    Opened,
    Started,
    Rewarded { reward: Reward },
    Completed { placement: Placement },
    Skipped { placement: Placement },
    Closed,
    LeftApplication,
}

/// Why a request was turned down. The state is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Loading while an ad plays would detach the playing ad's events.
    LoadWhilePlaying { requested: Placement },
    /// Another placement owns the single ad object.
    LoadInFlight {
        blocking: Placement,
        requested: Placement,
    },
}

impl Rejection {
    pub fn requested(&self) -> &Placement {
        match self {
            Self::LoadWhilePlaying { requested } | Self::LoadInFlight { requested, .. } => {
                requested
            }
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadWhilePlaying { requested } => write!(
                f,
                "cannot load a rewarded ad at placement {} while another one is playing",
                requested
            ),
            Self::LoadInFlight {
                blocking,
                requested,
            } => write!(
                f,
                "a rewarded ad at placement {} is being loaded; consume it before loading a new one at placement {}",
                blocking, requested
            ),
        }
    }
}

/// Side effect requested by a transition. The caller performs them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// Issue exactly one network load on behalf of this placement.
    IssueLoad { placement: Placement },
    IssueShow,
    Notify(RewardedNotification),
    Rejected(Rejection),
    /// The ad closed while no placement owned it.
    UnexpectedClose { rewarded: bool },
    /// A reward arrived while nothing was playing; it cannot complete anything.
    UnexpectedReward,
}
