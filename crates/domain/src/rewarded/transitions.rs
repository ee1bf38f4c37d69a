//! Pure transition function for the rewarded-ad state machine.

use crate::events::{AdEvent, Emission, Rejection, RewardedNotification};
use crate::{Placement, Reward};

use super::RewardedState;

/// Everything that can move the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardedInput {
    /// The game asks for an ad at this placement. Configuration has already
    /// been resolved by the caller.
    RequestLoad(Placement),
    /// The game shows whatever ad is loaded, on behalf of this placement.
    Show(Placement),
    Network(AdEvent),
}

/// Result of one step: the next state plus the effects to perform, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: RewardedState,
    pub emissions: Vec<Emission>,
}

impl Transition {
    fn stay(state: RewardedState, emissions: Vec<Emission>) -> Self {
        Self {
            next: state,
            emissions,
        }
    }

    fn to(next: RewardedState, emissions: Vec<Emission>) -> Self {
        Self { next, emissions }
    }
}

/// Compute the next state for `input`.
///
/// ```
/// use pinball_ads_domain::events::{AdEvent, Emission, RewardedNotification};
/// use pinball_ads_domain::rewarded::{transition, RewardedInput, RewardedState};
/// use pinball_ads_domain::{Placement, Reward};
///
/// let mut state = RewardedState::Idle;
/// for input in [
///     RewardedInput::RequestLoad(Placement::Default),
///     RewardedInput::Network(AdEvent::Loaded),
///     RewardedInput::Show(Placement::Default),
///     RewardedInput::Network(AdEvent::rewarded(Reward::new(1.0, "ball"))),
/// ] {
///     state = transition(state, input).next;
/// }
///
/// let closed = transition(state, RewardedInput::Network(AdEvent::Closed));
/// assert_eq!(closed.next, RewardedState::Idle);
/// assert_eq!(
///     closed.emissions[0],
///     Emission::Notify(RewardedNotification::Completed { placement: Placement::Default })
/// );
/// ```
pub fn transition(state: RewardedState, input: RewardedInput) -> Transition {
    match input {
        RewardedInput::RequestLoad(requested) => request_load(state, requested),
        RewardedInput::Show(requested) => show(state, requested),
        RewardedInput::Network(event) => network_event(state, event),
    }
}

fn request_load(state: RewardedState, requested: Placement) -> Transition {
    match state {
        RewardedState::Playing { .. } => Transition::stay(
            state,
            vec![Emission::Rejected(Rejection::LoadWhilePlaying { requested })],
        ),
        RewardedState::Loading { ref placement, .. } if *placement != requested => {
            let rejection = Rejection::LoadInFlight {
                blocking: placement.clone(),
                requested,
            };
            Transition::stay(state, vec![Emission::Rejected(rejection)])
        }
        // The same placement asking again keeps ownership and any reward
        // already granted; a fresh load goes out.
        RewardedState::Loading { rewarded, .. } => Transition::to(
            RewardedState::Loading {
                placement: requested.clone(),
                rewarded,
            },
            vec![Emission::IssueLoad {
                placement: requested,
            }],
        ),
        RewardedState::Idle => Transition::to(
            RewardedState::loading(requested.clone()),
            vec![Emission::IssueLoad {
                placement: requested,
            }],
        ),
    }
}

/// Show is not guarded: the backend is told to show whatever it holds, and
/// the outcome is attributed to the owner, not to `_requested`.
fn show(state: RewardedState, _requested: Placement) -> Transition {
    match state {
        RewardedState::Playing { .. } => Transition::stay(state, vec![Emission::IssueShow]),
        RewardedState::Loading {
            placement,
            rewarded,
        } => Transition::to(
            RewardedState::Playing {
                owner: Some(placement),
                rewarded,
            },
            vec![Emission::IssueShow],
        ),
        RewardedState::Idle => Transition::to(
            RewardedState::Playing {
                owner: None,
                rewarded: false,
            },
            vec![Emission::IssueShow],
        ),
    }
}

fn network_event(state: RewardedState, event: AdEvent) -> Transition {
    match event {
        AdEvent::Loaded => Transition::stay(state, notify(RewardedNotification::Loaded)),
        AdEvent::Opened => Transition::stay(state, notify(RewardedNotification::Opened)),
        AdEvent::Started => Transition::stay(state, notify(RewardedNotification::Started)),
        AdEvent::LeftApplication => {
            Transition::stay(state, notify(RewardedNotification::LeftApplication))
        }
        AdEvent::FailedToLoad { reason } => {
            let next = match state {
                RewardedState::Playing { rewarded, .. } => RewardedState::Playing {
                    owner: None,
                    rewarded,
                },
                RewardedState::Idle | RewardedState::Loading { .. } => RewardedState::Idle,
            };
            Transition::to(next, notify(RewardedNotification::FailedToLoad { reason }))
        }
        AdEvent::Rewarded { reward } => match state {
            RewardedState::Playing { owner, .. } => Transition::to(
                RewardedState::Playing {
                    owner,
                    rewarded: true,
                },
                notify(RewardedNotification::Rewarded { reward }),
            ),
            // Granted before show: still recorded for the owner, so the
            // eventual close completes.
            RewardedState::Loading { placement, .. } => Transition::to(
                RewardedState::Loading {
                    placement,
                    rewarded: true,
                },
                unexpected_reward(reward),
            ),
            RewardedState::Idle => Transition::stay(RewardedState::Idle, unexpected_reward(reward)),
        },
        AdEvent::Closed => close(state),
    }
}

fn close(state: RewardedState) -> Transition {
    let outcome = match state {
        RewardedState::Playing {
            owner: Some(placement),
            rewarded,
        }
        | RewardedState::Loading {
            placement,
            rewarded,
        } => {
            if rewarded {
                Emission::Notify(RewardedNotification::Completed { placement })
            } else {
                Emission::Notify(RewardedNotification::Skipped { placement })
            }
        }
        RewardedState::Playing {
            owner: None,
            rewarded,
        } => Emission::UnexpectedClose { rewarded },
        RewardedState::Idle => Emission::UnexpectedClose { rewarded: false },
    };

    Transition::to(
        RewardedState::Idle,
        vec![outcome, Emission::Notify(RewardedNotification::Closed)],
    )
}

fn notify(notification: RewardedNotification) -> Vec<Emission> {
    vec![Emission::Notify(notification)]
}

fn unexpected_reward(reward: Reward) -> Vec<Emission> {
    vec![
        Emission::UnexpectedReward,
        Emission::Notify(RewardedNotification::Rewarded { reward }),
    ]
}

impl RewardedState {
    /// Apply `input` in place and return the emissions.
    pub fn apply(&mut self, input: RewardedInput) -> Vec<Emission> {
        let Transition { next, emissions } = transition(std::mem::take(self), input);
        *self = next;
        emissions
    }
}
