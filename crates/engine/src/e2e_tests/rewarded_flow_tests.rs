use pinball_ads_domain::{
    AdEvent, ConsentStatus, Placement, Reward, RewardedNotification, SIMULATOR_TEST_DEVICE,
};

use std::sync::Arc;

use super::helpers::{game, lvl2, script};
use crate::infrastructure::consent_store::FileConsentStore;
use crate::infrastructure::ports::LogLevel;

fn failed(n: &RewardedNotification) -> bool {
    matches!(n, RewardedNotification::FailedToLoad { .. })
}

#[tokio::test]
async fn default_placement_watched_to_end_completes() {
    let mut game = game(script(true, true), ConsentStatus::Granted);

    game.coordinator.request_load(&Placement::Default).unwrap();
    game.run_until(|g| g.coordinator.is_ready(&Placement::Default))
        .await;

    game.coordinator.show(&Placement::Default);
    game.run_until(|g| g.closed_count() == 1).await;

    assert_eq!(
        game.sink.notifications(),
        vec![
            RewardedNotification::Loaded,
            RewardedNotification::Opened,
            RewardedNotification::Started,
            RewardedNotification::Rewarded {
                reward: Reward::new(1.0, "extra_ball")
            },
            RewardedNotification::Completed {
                placement: Placement::Default
            },
            RewardedNotification::Closed,
        ]
    );
    assert!(game.coordinator.state().is_idle());

    let loads = game.network.loads();
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].request.test_devices()[0], SIMULATOR_TEST_DEVICE);
    assert!(!loads[0].request.is_non_personalized());
}

#[tokio::test]
async fn custom_placement_closed_early_is_skipped() {
    let mut game = game(script(true, false), ConsentStatus::Revoked);

    game.coordinator.request_load(&lvl2()).unwrap();
    game.run_until(|g| g.coordinator.is_ready(&lvl2())).await;
    assert!(!game.coordinator.is_ready(&Placement::Default));

    game.coordinator.show(&lvl2());
    game.run_until(|g| g.closed_count() == 1).await;

    let notifications = game.sink.notifications();
    assert!(notifications.contains(&RewardedNotification::Skipped { placement: lvl2() }));
    assert!(!notifications
        .iter()
        .any(|n| matches!(n, RewardedNotification::Completed { .. })));
    assert!(game.network.loads()[0].request.is_non_personalized());
}

#[tokio::test]
async fn no_fill_frees_the_ad_object_for_another_placement() {
    let mut game = game(script(false, true), ConsentStatus::Unknown);

    game.coordinator.request_load(&lvl2()).unwrap();
    assert!(game
        .coordinator
        .request_load(&Placement::Default)
        .unwrap_err()
        .is_conflict());

    game.run_until(|g| g.sink.count(failed) == 1).await;
    assert!(game.coordinator.state().is_idle());
    assert!(game.log.contains(LogLevel::Info, "No fill"));

    game.network.set_script(script(true, true));
    game.coordinator.request_load(&Placement::Default).unwrap();
    game.run_until(|g| g.coordinator.is_ready(&Placement::Default))
        .await;
    assert_eq!(game.network.loads().len(), 2);
}

#[tokio::test]
async fn unconfigured_placement_never_reaches_the_network() {
    let mut game = game(script(true, true), ConsentStatus::Unknown);

    let err = game
        .coordinator
        .request_load(&Placement::custom("bonus_round").unwrap())
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(game.network.loads().is_empty());
    assert!(game.coordinator.state().is_idle());
}

#[tokio::test]
async fn show_without_load_closes_as_unexpected() {
    let mut game = game(script(true, true), ConsentStatus::Unknown);

    game.coordinator.show(&Placement::Default);
    game.run_until(|g| g.closed_count() == 1).await;

    assert_eq!(game.sink.notifications(), vec![RewardedNotification::Closed]);
    assert!(game
        .log
        .contains(LogLevel::Warn, "unexpected rewarded ad was skipped"));
    assert_eq!(game.network.show_calls(), 1);
}

#[tokio::test]
async fn event_from_second_producer_is_ordered_with_network_events() {
    let mut game = game(script(true, true), ConsentStatus::Unknown);

    game.coordinator.request_load(&Placement::Default).unwrap();
    game.run_until(|g| g.coordinator.is_ready(&Placement::Default))
        .await;

    let sdk = game.sdk.clone();
    std::thread::spawn(move || sdk.send(AdEvent::LeftApplication).unwrap())
        .join()
        .unwrap();
    assert_eq!(game.coordinator.pump(), 1);

    assert_eq!(
        game.sink.notifications(),
        vec![
            RewardedNotification::Loaded,
            RewardedNotification::LeftApplication
        ]
    );
    assert!(game.coordinator.state().owns(&Placement::Default));
}

#[tokio::test]
async fn consent_persists_into_the_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ad_consent.json");

    let mut first = game(script(true, true), ConsentStatus::Unknown);
    first.coordinator = first
        .coordinator
        .with_consent_store(Arc::new(FileConsentStore::new(&path)));
    first
        .coordinator
        .set_data_privacy_consent(ConsentStatus::Revoked);
    drop(first);

    let mut second = game(script(true, true), ConsentStatus::Unknown);
    second.coordinator = second
        .coordinator
        .with_consent_store(Arc::new(FileConsentStore::new(&path)));
    assert_eq!(
        second.coordinator.data_privacy_consent(),
        ConsentStatus::Revoked
    );

    second.coordinator.request_load(&Placement::Default).unwrap();
    assert!(second.network.loads()[0].request.is_non_personalized());
}
