use std::sync::Arc;
use std::time::Duration;

use pinball_ads_domain::{ConsentStatus, Placement};
use tokio::runtime::Handle;

use crate::infrastructure::event_queue::{self, AdEventSender};
use crate::infrastructure::settings::AdNetworkSettings;
use crate::infrastructure::simulated_network::{SimulatedAdNetwork, SimulationScript};
use crate::test_fixtures::{RecordingDiagnosticLog, RecordingEventSink};
use crate::RewardedAdCoordinator;

/// Upper bound on any single wait for the simulated network.
const STEP_TIMEOUT: Duration = Duration::from_secs(5);

pub(super) struct Game {
    pub coordinator: RewardedAdCoordinator,
    pub network: Arc<SimulatedAdNetwork>,
    pub sink: Arc<RecordingEventSink>,
    pub log: Arc<RecordingDiagnosticLog>,
    /// Extra producer handle, as a second SDK thread would hold.
    pub sdk: AdEventSender,
}

pub(super) fn script(fill: bool, watch_to_end: bool) -> SimulationScript {
    SimulationScript {
        latency: Duration::from_millis(1),
        fill,
        watch_to_end,
        ..SimulationScript::default()
    }
}

/// Wire a coordinator to the simulated network. Placements come from the
/// test-unit settings (default plus `lvl2`).
pub(super) fn game(script: SimulationScript, consent: ConsentStatus) -> Game {
    let settings = AdNetworkSettings::test_defaults();
    let (sender, receiver) = event_queue::channel();
    let network = Arc::new(SimulatedAdNetwork::new(
        Handle::current(),
        sender.clone(),
        script,
    ));
    let sink = Arc::new(RecordingEventSink::default());
    let log = Arc::new(RecordingDiagnosticLog::default());

    let mut coordinator = RewardedAdCoordinator::new(
        network.clone(),
        Arc::new(settings.clone()),
        sink.clone(),
        log.clone(),
        receiver,
    )
    .with_request_profile(settings.request_profile());
    coordinator.set_data_privacy_consent(consent);

    Game {
        coordinator,
        network,
        sink,
        log,
        sdk: sender,
    }
}

pub(super) fn lvl2() -> Placement {
    Placement::custom("lvl2").unwrap()
}

impl Game {
    /// Apply events until `done` holds. Panics on timeout or a closed queue.
    pub async fn run_until(&mut self, done: impl Fn(&Self) -> bool) {
        while !done(self) {
            let next = tokio::time::timeout(STEP_TIMEOUT, self.coordinator.process_next())
                .await
                .expect("simulated network stalled");
            assert!(next, "event queue closed");
        }
    }

    pub fn closed_count(&self) -> usize {
        self.sink
            .count(|n| matches!(n, pinball_ads_domain::RewardedNotification::Closed))
    }
}
