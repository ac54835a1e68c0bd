use super::*;
use crate::error::{config::ConfigError, presence::PresenceError, AppError};
use crate::model::{
    document::path,
    presence::{Activity, ActivityKind, BotStatus, Presence},
};
use crate::service::PresenceController;

/// Tests that a Streaming activity pointing outside Twitch is rejected up front.
///
/// Expected: InvalidStreamingUrl, no session call, `bot_presence` unchanged
#[tokio::test]
async fn rejects_foreign_streaming_url_before_side_effects() {
    let (test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);
    let before = store.get(path::BOT_PRESENCE).await;

    let result = controller
        .apply_presence(Presence::new(
            BotStatus::Online,
            Some(Activity::new(
                ActivityKind::Streaming,
                "Live",
                Some("https://evil.example/x".to_string()),
            )),
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PresenceErr(PresenceError::InvalidStreamingUrl(_)))
    ));
    assert!(platform.presences().is_empty());
    assert_eq!(store.get(path::BOT_PRESENCE).await, before);
    assert_eq!(document_section(&test, path::BOT_PRESENCE), before.unwrap());
}

/// Tests the persisted shape after applying a presence.
///
/// Expected: `bot_presence` holds status, type, name and a null url
#[tokio::test]
async fn persists_applied_presence() {
    let (test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);
    let presence = Presence::new(
        BotStatus::Idle,
        Some(Activity::new(ActivityKind::Playing, "Chess", None)),
    );

    controller.apply_presence(presence.clone()).await.unwrap();

    let expected = json!({
        "status": "idle",
        "activity": { "type": "Playing", "name": "Chess", "url": null }
    });
    assert_eq!(store.get(path::BOT_PRESENCE).await, Some(expected.clone()));
    assert_eq!(document_section(&test, path::BOT_PRESENCE), expected);
    assert_eq!(platform.presences(), vec![presence]);
}

/// Tests that applying the same presence twice is idempotent on disk.
///
/// Expected: identical documents after the first and second application
#[tokio::test]
async fn applying_same_presence_twice_is_idempotent() {
    let (test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);
    let presence = Presence::new(
        BotStatus::Dnd,
        Some(Activity::new(ActivityKind::Listening, "the wind", None)),
    );

    controller.apply_presence(presence.clone()).await.unwrap();
    let first = test.read_document().unwrap();
    controller.apply_presence(presence).await.unwrap();
    let second = test.read_document().unwrap();

    assert_eq!(first, second);
}

/// Tests that a session failure prevents persistence.
///
/// Expected: PresenceErr(Apply) and the document untouched
#[tokio::test]
async fn session_failure_is_not_persisted() {
    let (test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new().failing_presence();
    let controller = PresenceController::new(&store, &platform);
    let before = test.read_document().unwrap();

    let result = controller.set_status(BotStatus::Invisible).await;

    assert!(matches!(
        result,
        Err(AppError::PresenceErr(PresenceError::Apply(_)))
    ));
    assert_eq!(test.read_document().unwrap(), before);
}

/// Tests recovery when the document cannot be written.
///
/// Verifies that the previous presence is re-applied to the session and that the
/// in-memory document keeps the old value.
///
/// Expected: ConfigErr(Persist), session ends on the previous presence
#[tokio::test]
async fn persist_failure_restores_previous_presence() {
    let (test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);
    let previous = controller.current().await;
    test.remove_storage().unwrap();

    let result = controller.set_status(BotStatus::Idle).await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::Persist { .. }))
    ));
    let applied = platform.presences();
    assert_eq!(applied.len(), 2);
    assert_eq!(applied[0].status, BotStatus::Idle);
    assert_eq!(applied[1], previous);
    assert_eq!(controller.current().await, previous);
}

/// Tests that changing the status keeps the configured activity.
///
/// Expected: status replaced, fixture activity kept
#[tokio::test]
async fn set_status_keeps_activity() {
    let (_test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);

    let presence = controller.set_status(BotStatus::Dnd).await.unwrap();

    assert_eq!(
        presence,
        Presence::new(
            BotStatus::Dnd,
            Some(Activity::new(ActivityKind::Watching, "the gates", None))
        )
    );
}

/// Tests that changing the activity keeps a status changed earlier.
///
/// Expected: status from the first update, activity from the second
#[tokio::test]
async fn set_activity_rereads_current_status() {
    let (_test, store) = load_store(TestBuilder::new()).await;
    let platform = RecordingPlatform::new();
    let controller = PresenceController::new(&store, &platform);

    controller.set_status(BotStatus::Idle).await.unwrap();
    let presence = controller
        .set_activity(Activity::new(
            ActivityKind::Streaming,
            "Live",
            Some("https://www.twitch.tv/vigil".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(presence.status, BotStatus::Idle);
    assert_eq!(
        store.get("bot_presence.activity.url").await,
        Some(json!("https://www.twitch.tv/vigil"))
    );
}

/// Tests restoring a stored presence with unknown values.
///
/// Expected: online without activity applied, document not rewritten
#[tokio::test]
async fn restore_tolerates_unknown_values_without_persisting() {
    let (test, store) = load_store(TestBuilder::new().with_section(
        path::BOT_PRESENCE,
        json!({ "status": "away", "activity": { "type": "Dancing", "name": "Salsa" } }),
    ))
    .await;
    let platform = RecordingPlatform::new();
    let before = test.read_document().unwrap();

    let presence = PresenceController::new(&store, &platform)
        .restore_from_config()
        .await
        .unwrap();

    assert_eq!(presence, Presence::new(BotStatus::Online, None));
    assert_eq!(platform.presences(), vec![presence]);
    assert_eq!(test.read_document().unwrap(), before);
}

/// Tests restoring when no presence was ever saved.
///
/// Expected: default presence applied
#[tokio::test]
async fn restore_without_section_applies_default() {
    let (_test, store) =
        load_store(TestBuilder::new().without_section(path::BOT_PRESENCE)).await;
    let platform = RecordingPlatform::new();

    let presence = PresenceController::new(&store, &platform)
        .restore_from_config()
        .await
        .unwrap();

    assert_eq!(presence, Presence::default());
}

/// Tests restoring a streaming activity set from the environment without a URL.
///
/// Expected: the configured status is applied without the activity
#[tokio::test]
async fn restore_keeps_status_when_streaming_url_is_missing() {
    let test = TestBuilder::new().build().unwrap();
    let overlay = json!({
        "bot_presence": {
            "status": "idle",
            "activity": { "type": "Streaming", "name": "Live" }
        }
    });
    let store = ConfigStore::load(&test.config_path, overlay).await.unwrap();
    let platform = RecordingPlatform::new();

    let presence = PresenceController::new(&store, &platform)
        .restore_from_config()
        .await
        .unwrap();

    assert_eq!(presence, Presence::new(BotStatus::Idle, None));
    assert_eq!(platform.presences(), vec![presence]);
}
