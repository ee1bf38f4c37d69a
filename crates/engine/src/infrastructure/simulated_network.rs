//! In-process stand-in for the rewarded-ad SDK.
//!
//! Behaves like the real network from the coordinator's point of view: calls
//! return immediately and outcomes arrive later, from Tokio tasks, through the
//! event queue. What happens is driven by a [`SimulationScript`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pinball_ads_domain::{AdEvent, AdRequest, AdUnitId, Reward};
use tokio::runtime::Handle;

use crate::infrastructure::event_queue::AdEventSender;
use crate::infrastructure::ports::AdNetworkBackend;

/// Environment variable for the simulated network latency.
pub const SIM_LATENCY_ENV: &str = "PINBALL_ADS_SIM_LATENCY_MS";

/// How the simulated network answers the next load and show.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationScript {
    /// Delay before a load resolves, and the length of the "video".
    pub latency: Duration,
    /// `false` answers loads with a no-fill failure.
    pub fill: bool,
    /// `false` closes the ad before the reward is granted.
    pub watch_to_end: bool,
    pub reward: Reward,
}

impl Default for SimulationScript {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(250),
            fill: true,
            watch_to_end: true,
            reward: Reward::new(1.0, "extra_ball"),
        }
    }
}

impl SimulationScript {
    /// Default script with the latency taken from `PINBALL_ADS_SIM_LATENCY_MS`
    /// when it parses.
    pub fn from_env() -> Self {
        let mut script = Self::default();
        if let Some(ms) = std::env::var(SIM_LATENCY_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
        {
            script.latency = Duration::from_millis(ms);
        }
        script
    }
}

/// A load the simulated network received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLoad {
    pub unit_id: AdUnitId,
    pub request: AdRequest,
}

pub struct SimulatedAdNetwork {
    runtime: Handle,
    events: AdEventSender,
    script: Mutex<SimulationScript>,
    loaded: Arc<AtomicBool>,
    loads: Mutex<Vec<RecordedLoad>>,
    show_calls: AtomicUsize,
}

impl SimulatedAdNetwork {
    pub fn new(runtime: Handle, events: AdEventSender, script: SimulationScript) -> Self {
        Self {
            runtime,
            events,
            script: Mutex::new(script),
            loaded: Arc::new(AtomicBool::new(false)),
            loads: Mutex::new(Vec::new()),
            show_calls: AtomicUsize::new(0),
        }
    }

    /// Replace the script used for subsequent loads and shows.
    pub fn set_script(&self, script: SimulationScript) {
        *self.script.lock().unwrap_or_else(PoisonError::into_inner) = script;
    }

    pub fn script(&self) -> SimulationScript {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn loads(&self) -> Vec<RecordedLoad> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn show_calls(&self) -> usize {
        self.show_calls.load(Ordering::Relaxed)
    }
}

fn emit(events: &AdEventSender, event: AdEvent) {
    if let Err(e) = events.send(event) {
        tracing::warn!(error = %e, "Simulated network could not deliver event");
    }
}

impl AdNetworkBackend for SimulatedAdNetwork {
    fn load_ad(&self, unit_id: &AdUnitId, request: &AdRequest) {
        tracing::debug!(
            unit_id = %unit_id,
            test_request = request.is_test_request(),
            non_personalized = request.is_non_personalized(),
            "Simulated network loading rewarded ad"
        );

        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedLoad {
                unit_id: unit_id.clone(),
                request: request.clone(),
            });

        // A new load replaces whatever was loaded.
        self.loaded.store(false, Ordering::SeqCst);

        let script = self.script();
        let events = self.events.clone();
        let loaded = Arc::clone(&self.loaded);
        self.runtime.spawn(async move {
            tokio::time::sleep(script.latency).await;
            if script.fill {
                loaded.store(true, Ordering::SeqCst);
                emit(&events, AdEvent::Loaded);
            } else {
                emit(&events, AdEvent::failed_to_load("No fill"));
            }
        });
    }

    fn show(&self) {
        self.show_calls.fetch_add(1, Ordering::Relaxed);
        let was_loaded = self.loaded.swap(false, Ordering::SeqCst);

        let script = self.script();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            if !was_loaded {
                // Nothing to play: the ad surface opens and dismisses at once.
                tracing::warn!("Simulated network asked to show with no ad loaded");
                emit(&events, AdEvent::Closed);
                return;
            }

            emit(&events, AdEvent::Opened);
            emit(&events, AdEvent::Started);
            tokio::time::sleep(script.latency).await;
            if script.watch_to_end {
                emit(&events, AdEvent::rewarded(script.reward));
            }
            emit(&events, AdEvent::Closed);
        });
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }
}
