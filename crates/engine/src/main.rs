//! Pinball Ads - rewarded-ad flow runner.
//!
//! Runs one load-and-show cycle per configured placement against the
//! simulated ad network and logs every callback the game would receive.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinball_ads_domain::{ConsentStatus, Placement};
use pinball_ads_engine::infrastructure::{
    consent_store::FileConsentStore,
    diagnostics::TracingDiagnosticLog,
    event_queue,
    settings::AdNetworkSettings,
    simulated_network::{SimulatedAdNetwork, SimulationScript},
    tracing_sink::TracingEventSink,
};
use pinball_ads_engine::RewardedAdCoordinator;

const CONSENT_ENV: &str = "PINBALL_ADS_CONSENT";

/// Longest wait for a single network event before giving up on a placement.
const EVENT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinball_ads_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pinball Ads rewarded flow runner");

    let settings = AdNetworkSettings::from_env().context("loading ad settings")?;
    let consent_override = match std::env::var(CONSENT_ENV) {
        Ok(raw) => Some(
            raw.parse::<ConsentStatus>()
                .with_context(|| format!("parsing {CONSENT_ENV}"))?,
        ),
        Err(_) => None,
    };
    let consent_store = FileConsentStore::from_env();
    tracing::info!(
        app_id = %settings.app_id,
        test_mode = settings.enable_test_mode,
        consent_file = %consent_store.path().display(),
        "Ad settings loaded"
    );

    let (sender, receiver) = event_queue::channel();
    let network = Arc::new(SimulatedAdNetwork::new(
        tokio::runtime::Handle::current(),
        sender,
        SimulationScript::from_env(),
    ));

    let mut coordinator = RewardedAdCoordinator::new(
        network.clone(),
        Arc::new(settings.clone()),
        Arc::new(TracingEventSink),
        Arc::new(TracingDiagnosticLog),
        receiver,
    )
    .with_request_profile(settings.request_profile())
    .with_consent_store(Arc::new(consent_store));
    if let Some(consent) = consent_override {
        coordinator.set_data_privacy_consent(consent);
    }
    tracing::info!(
        consent = %coordinator.data_privacy_consent(),
        "Data privacy consent"
    );

    let mut placements = vec![Placement::Default];
    placements.extend(settings.custom_placements());

    for (index, placement) in placements.iter().enumerate() {
        // Alternate between watching to the end and closing early so both
        // outcomes show up in the log.
        let mut script = network.script();
        script.watch_to_end = index % 2 == 0;
        network.set_script(script);

        run_placement(&mut coordinator, placement).await?;
    }

    tracing::info!(placements = placements.len(), "Rewarded flow runner finished");
    Ok(())
}

/// Load, wait for the outcome, and show if the load filled.
async fn run_placement(
    coordinator: &mut RewardedAdCoordinator,
    placement: &Placement,
) -> anyhow::Result<()> {
    tracing::info!(placement = %placement, "Requesting rewarded ad");
    if let Err(e) = coordinator.request_load(placement) {
        tracing::warn!(placement = %placement, error = %e, "Rewarded ad request refused");
        return Ok(());
    }

    while !coordinator.is_ready(placement) && !coordinator.state().is_idle() {
        next_event(coordinator).await?;
    }
    if !coordinator.is_ready(placement) {
        return Ok(());
    }

    coordinator.show(placement);
    while coordinator.state().is_playing() {
        next_event(coordinator).await?;
    }
    Ok(())
}

async fn next_event(coordinator: &mut RewardedAdCoordinator) -> anyhow::Result<()> {
    let alive = tokio::time::timeout(EVENT_TIMEOUT, coordinator.process_next())
        .await
        .context("timed out waiting for the ad network")?;
    anyhow::ensure!(alive, "ad network event queue closed");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
