use super::*;

/// Tests that an update is visible in memory and written to disk.
///
/// Expected: Ok with the new value in both places
#[tokio::test]
async fn persists_full_document() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    store
        .update_and_persist("bot_presence.status", "idle")
        .await?;

    assert_eq!(store.get_str("bot_presence.status").await.as_deref(), Some("idle"));

    let on_disk = test.read_document().unwrap();
    assert_eq!(on_disk["bot_presence"]["status"], json!("idle"));
    // Unrelated sections are rewritten unchanged
    assert_eq!(on_disk["events"], fixture::document::config_document()["events"]);
    assert_eq!(on_disk, store.document().await);

    Ok(())
}

/// Tests that unknown keys survive a rewrite.
///
/// Expected: Ok with the custom key still present on disk
#[tokio::test]
async fn preserves_unknown_keys() -> Result<(), ConfigError> {
    let test = TestBuilder::new()
        .with_section("custom.flag", json!(true))
        .build()
        .unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    store.update_and_persist("guild_id", "42").await?;

    let on_disk = test.read_document().unwrap();
    assert_eq!(on_disk["custom"]["flag"], json!(true));
    assert_eq!(on_disk["guild_id"], json!("42"));

    Ok(())
}

/// Tests that missing intermediate sections are created.
///
/// Expected: Ok with the nested object created
#[tokio::test]
async fn creates_missing_sections() -> Result<(), ConfigError> {
    let test = TestBuilder::new().without_section("bot_presence").build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    store
        .update_and_persist("bot_presence.activity", json!({ "type": "Playing", "name": "x", "url": null }))
        .await?;

    assert_eq!(
        test.read_document().unwrap()["bot_presence"]["activity"]["name"],
        json!("x")
    );

    Ok(())
}

/// Tests that a path crossing a scalar is rejected without touching disk.
///
/// Expected: Err(ConfigError::InvalidPath) and unchanged file
#[tokio::test]
async fn rejects_path_through_scalar() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    let result = store.update_and_persist("guild_id.inner", 1).await;

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
    assert_eq!(test.read_document().unwrap(), fixture::document::config_document());

    Ok(())
}

/// Tests that a failed write leaves the in-memory document unchanged.
///
/// Removes the directory holding the document so the temporary file cannot be
/// created, then checks that the old value is still served.
///
/// Expected: Err(ConfigError::Persist) and the previous value in memory
#[tokio::test]
async fn failed_write_keeps_memory_unchanged() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;
    let before = store.document().await;

    test.remove_storage().unwrap();
    let result = store.update_and_persist("bot_presence.status", "dnd").await;

    assert!(matches!(result, Err(ConfigError::Persist { .. })));
    assert_eq!(store.document().await, before);
    assert_eq!(store.get_str("bot_presence.status").await.as_deref(), Some("online"));

    Ok(())
}

/// Tests that a runtime update supersedes the environment overlay.
///
/// Expected: The updated value is returned instead of the overlay value
#[tokio::test]
async fn update_clears_overlay_at_path() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let overlay = json!({ "bot_presence": { "status": "invisible" }, "guild_id": "9" });
    let store = ConfigStore::load(&test.config_path, overlay).await?;
    assert_eq!(store.get_str("bot_presence.status").await.as_deref(), Some("invisible"));

    store
        .update_and_persist("bot_presence", json!({ "status": "idle", "activity": null }))
        .await?;

    assert_eq!(store.get_str("bot_presence.status").await.as_deref(), Some("idle"));
    // Overlay values outside the updated path are untouched
    assert_eq!(store.get_str("guild_id").await.as_deref(), Some("9"));

    Ok(())
}

/// Tests that no temporary file is left next to the document.
///
/// Expected: Only the document remains in the directory
#[tokio::test]
async fn leaves_no_temporary_file() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    store.update_and_persist("guild_id", "1").await?;

    let entries: Vec<_> = std::fs::read_dir(test.dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);

    Ok(())
}
