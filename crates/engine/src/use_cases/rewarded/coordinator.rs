//! Rewarded-ad coordinator.
//!
//! Serializes access to the network's single rewarded-ad object across the
//! default placement and any number of custom placements, and turns raw
//! network events into placement-scoped callbacks.

use std::sync::Arc;

use pinball_ads_domain::{
    AdEvent, AdRequestProfile, AdUnitId, ConsentStatus, Emission, Placement, Rejection,
    RewardedInput, RewardedNotification, RewardedState,
};

use crate::infrastructure::event_queue::AdEventReceiver;
use crate::infrastructure::ports::{
    AdNetworkBackend, ConsentStore, DiagnosticLog, PlacementConfig, RewardedAdEventSink,
};

use super::RewardedAdError;

/// Owns the rewarded-ad state and is its only writer.
///
/// All methods take `&mut self` and are meant to be called from one context
/// (the game loop). Network events reach it through the [`AdEventReceiver`]
/// and are applied when that context calls [`pump`](Self::pump) or
/// [`process_next`](Self::process_next); sink callbacks run there too.
pub struct RewardedAdCoordinator {
    state: RewardedState,
    consent: ConsentStatus,
    request_profile: AdRequestProfile,
    network: Arc<dyn AdNetworkBackend>,
    placements: Arc<dyn PlacementConfig>,
    sink: Arc<dyn RewardedAdEventSink>,
    log: Arc<dyn DiagnosticLog>,
    consent_store: Option<Arc<dyn ConsentStore>>,
    events: AdEventReceiver,
}

impl RewardedAdCoordinator {
    pub fn new(
        network: Arc<dyn AdNetworkBackend>,
        placements: Arc<dyn PlacementConfig>,
        sink: Arc<dyn RewardedAdEventSink>,
        log: Arc<dyn DiagnosticLog>,
        events: AdEventReceiver,
    ) -> Self {
        Self {
            state: RewardedState::Idle,
            consent: ConsentStatus::Unknown,
            request_profile: AdRequestProfile::default(),
            network,
            placements,
            sink,
            log,
            consent_store: None,
            events,
        }
    }

    /// Set the targeting and test-mode parameters sent with every load.
    pub fn with_request_profile(mut self, profile: AdRequestProfile) -> Self {
        self.request_profile = profile;
        self
    }

    /// Persist consent through `store`, starting from whatever it holds.
    ///
    /// A store that cannot be read is logged and leaves consent as it was.
    pub fn with_consent_store(mut self, store: Arc<dyn ConsentStore>) -> Self {
        match store.load() {
            Ok(Some(consent)) => self.consent = consent,
            Ok(None) => {}
            Err(e) => self.log.warn(format_args!(
                "Failed to read saved data privacy consent: {}",
                e
            )),
        }
        self.consent_store = Some(store);
        self
    }

    pub fn state(&self) -> &RewardedState {
        &self.state
    }

    pub fn data_privacy_consent(&self) -> ConsentStatus {
        self.consent
    }

    /// Applies to loads issued from now on, and is saved to the consent
    /// store when one is attached.
    pub fn set_data_privacy_consent(&mut self, consent: ConsentStatus) {
        if self.consent != consent {
            self.log.info(format_args!(
                "Rewarded ad data privacy consent changed from {} to {}",
                self.consent, consent
            ));
        }
        self.consent = consent;

        if let Some(store) = &self.consent_store {
            if let Err(e) = store.save(consent) {
                self.log
                    .warn(format_args!("Failed to save data privacy consent: {}", e));
            }
        }
    }

    /// Ask the network for an ad at `placement`.
    ///
    /// Issues at most one network load. The outcome arrives later as
    /// `on_loaded` or `on_failed_to_load`.
    ///
    /// # Errors
    ///
    /// - [`RewardedAdError::Conflict`] while an ad is playing, or while a
    ///   different placement owns the in-flight load
    /// - [`RewardedAdError::MissingAdUnitId`] when the placement has no
    ///   configured ad unit
    ///
    /// Neither changes any state.
    pub fn request_load(&mut self, placement: &Placement) -> Result<(), RewardedAdError> {
        // Loading over a playing ad detaches that ad's events, so this check
        // comes before anything else.
        if self.state.is_playing() {
            return Err(self.reject(Rejection::LoadWhilePlaying {
                requested: placement.clone(),
            }));
        }

        let Some(unit_id) = self.placements.rewarded_unit_id(placement) else {
            self.log.warn(format_args!(
                "Attempting to load a rewarded ad with an undefined ID at placement {}",
                placement
            ));
            return Err(RewardedAdError::MissingAdUnitId {
                placement: placement.clone(),
            });
        };

        let emissions = self
            .state
            .apply(RewardedInput::RequestLoad(placement.clone()));
        self.perform(emissions, Some(&unit_id))
    }

    /// Whether `placement` owns the ad object and the network has it loaded.
    pub fn is_ready(&self, placement: &Placement) -> bool {
        self.state.owns(placement) && self.network.is_loaded()
    }

    /// Show the loaded ad. Readiness is the caller's responsibility, and the
    /// outcome is reported for the placement that owns the ad object.
    pub fn show(&mut self, placement: &Placement) {
        if self.state.is_playing() {
            self.log.debug(format_args!(
                "Showing rewarded ad at placement {} while one is already playing",
                placement
            ));
        }
        let emissions = self.state.apply(RewardedInput::Show(placement.clone()));
        self.perform_unattended(emissions);
    }

    /// Apply one network event. Must be called on the coordinator's context;
    /// network backends go through the event queue instead.
    pub fn handle_event(&mut self, event: AdEvent) {
        self.log
            .debug(format_args!("Rewarded ad network event: {}", event.kind()));
        let emissions = self.state.apply(RewardedInput::Network(event));
        self.perform_unattended(emissions);
    }

    /// Apply every queued network event without waiting. Returns how many
    /// were applied. Call once per frame.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.events.try_next() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next network event and apply it. Returns `false` once
    /// every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.events.next().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    fn perform(
        &self,
        emissions: Vec<Emission>,
        unit_id: Option<&AdUnitId>,
    ) -> Result<(), RewardedAdError> {
        for emission in emissions {
            match emission {
                Emission::IssueLoad { placement } => {
                    let Some(unit_id) = unit_id else {
                        return Err(RewardedAdError::MissingAdUnitId { placement });
                    };
                    let request = self.request_profile.build(self.consent);
                    self.log.debug(format_args!(
                        "Loading rewarded ad {} at placement {}",
                        unit_id, placement
                    ));
                    self.network.load_ad(unit_id, &request);
                }
                Emission::IssueShow => self.network.show(),
                Emission::Notify(notification) => self.deliver(notification),
                Emission::Rejected(rejection) => return Err(self.reject(rejection)),
                Emission::UnexpectedClose { rewarded } => {
                    self.log.warn(format_args!(
                        "An unexpected rewarded ad was {}",
                        if rewarded { "completed" } else { "skipped" }
                    ));
                }
                Emission::UnexpectedReward => {
                    self.log.warn(format_args!(
                        "Rewarded ad granted a reward while no ad was playing"
                    ));
                }
            }
        }
        Ok(())
    }

    /// For inputs with no caller to hand an error to.
    fn perform_unattended(&self, emissions: Vec<Emission>) {
        if let Err(e) = self.perform(emissions, None) {
            self.log.error(format_args!(
                "Rewarded ad transition produced a failed effect: {}",
                e
            ));
        }
    }

    fn deliver(&self, notification: RewardedNotification) {
        match notification {
            RewardedNotification::Loaded => {
                self.log
                    .debug(format_args!("Rewarded ad has been loaded successfully"));
                self.sink.on_loaded();
            }
            RewardedNotification::FailedToLoad { reason } => {
                self.log
                    .info(format_args!("Rewarded ad failed to load: {}", reason));
                self.sink.on_failed_to_load(&reason);
            }
            RewardedNotification::Opened => self.sink.on_opened(),
            RewardedNotification::Started => self.sink.on_started(),
            RewardedNotification::Rewarded { reward } => self.sink.on_rewarded(&reward),
            RewardedNotification::Completed { placement } => self.sink.on_completed(&placement),
            RewardedNotification::Skipped { placement } => self.sink.on_skipped(&placement),
            RewardedNotification::Closed => self.sink.on_closed(),
            RewardedNotification::LeftApplication => self.sink.on_left_application(),
        }
    }

    fn reject(&self, rejection: Rejection) -> RewardedAdError {
        match rejection {
            Rejection::LoadWhilePlaying { .. } => self.log.debug(format_args!("{}", rejection)),
            Rejection::LoadInFlight { .. } => self.log.warn(format_args!("{}", rejection)),
        }
        RewardedAdError::Conflict(rejection)
    }
}
