//! Rewarded-ad load state.
//!
//! Replaces the flag set `is_playing` / `is_loading_default` /
//! `is_loading_custom` / `loading_custom_placement` / `is_completed`, so that
//! "loading default and custom at once" or "custom placement without a custom
//! load" cannot be constructed.

use crate::Placement;

/// Who owns the single rewarded-ad object, and what it is doing.
///
/// # State Transitions
///
/// ```text
/// Idle ----load(P)----> Loading { P } ----show----> Playing { owner: Some(P) }
///   ^                       |                              |
///   +----failed to load-----+                              |
///   +------------------------------closed------------------+
/// ```
///
/// A load that succeeds stays in `Loading`: the ad is loaded but still owned
/// by `P` until it is shown and closed, or a later load fails.
///
/// `rewarded` records a granted reward for the owned ad object. It survives
/// the move from `Loading` to `Playing`, and the close consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RewardedState {
    #[default]
    Idle,
    /// `placement` owns the in-flight (or already loaded) ad object.
    Loading {
        placement: Placement,
        rewarded: bool,
    },
    /// An ad is on screen. `owner` is `None` when it was shown without a
    /// tracked load, or a load failure cleared ownership mid-play.
    Playing {
        owner: Option<Placement>,
        rewarded: bool,
    },
}

impl RewardedState {
    /// Fresh ownership by `placement`, no reward yet.
    pub fn loading(placement: Placement) -> Self {
        Self::Loading {
            placement,
            rewarded: false,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// The placement that owns the ad object, whether loading or playing.
    pub fn owner(&self) -> Option<&Placement> {
        match self {
            Self::Idle => None,
            Self::Loading { placement, .. } => Some(placement),
            Self::Playing { owner, .. } => owner.as_ref(),
        }
    }

    pub fn owns(&self, placement: &Placement) -> bool {
        self.owner() == Some(placement)
    }

    pub fn is_loading_default(&self) -> bool {
        self.owner().is_some_and(Placement::is_default)
    }

    pub fn is_loading_custom(&self) -> bool {
        self.owner().is_some_and(Placement::is_custom)
    }

    /// The custom placement owning the ad object; `None` for default or idle.
    pub fn loading_custom_placement(&self) -> Option<&Placement> {
        self.owner().filter(|placement| placement.is_custom())
    }

    /// A reward was granted for the ad object and has not been closed out.
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            Self::Loading { rewarded: true, .. } | Self::Playing { rewarded: true, .. }
        )
    }
}
