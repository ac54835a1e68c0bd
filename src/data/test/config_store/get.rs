use super::*;

/// Tests reading nested values by dotted path.
///
/// Expected: Some with the configured channel id
#[tokio::test]
async fn reads_nested_paths() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    assert_eq!(
        store.get("channels.join_log").await,
        Some(json!(fixture::document::JOIN_CHANNEL_ID))
    );
    assert_eq!(store.get("channels.nope").await, None);
    assert_eq!(store.get("guild_id.nested").await, None);
    assert_eq!(store.get("").await, None);

    Ok(())
}

/// Tests that overlay values win over document values.
///
/// Verifies that a scalar overlay replaces the file value and that objects are merged
/// key by key, leaving untouched file keys visible.
///
/// Expected: Overlay values returned, sibling file values preserved
#[tokio::test]
async fn overlay_wins_over_document() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let overlay = json!({
        "channels": { "join_log": "555" },
        "bot_presence": { "status": "dnd" }
    });
    let store = ConfigStore::load(&test.config_path, overlay).await?;

    assert_eq!(store.get_str("channels.join_log").await.as_deref(), Some("555"));
    assert_eq!(
        store.get_str("channels.leave_log").await.as_deref(),
        Some(fixture::document::LEAVE_CHANNEL_ID)
    );

    let presence = store.get("bot_presence").await.unwrap();
    assert_eq!(presence["status"], json!("dnd"));
    assert_eq!(presence["activity"]["name"], json!("the gates"));

    // The overlay never reaches the persisted document
    assert_eq!(
        store.document().await["channels"]["join_log"],
        json!(fixture::document::JOIN_CHANNEL_ID)
    );

    Ok(())
}

/// Tests that null and empty strings read as unset through `get_str`.
///
/// Expected: None for both
#[tokio::test]
async fn get_str_treats_empty_values_as_unset() -> Result<(), ConfigError> {
    let test = TestBuilder::new()
        .with_section("channels.join_log", json!(""))
        .with_section("channels.leave_log", Value::Null)
        .build()
        .unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    assert_eq!(store.get_str("channels.join_log").await, None);
    assert_eq!(store.get_str("channels.leave_log").await, None);

    Ok(())
}

/// Tests typed section reads.
///
/// Expected: Ok(Some) for a matching section, Ok(None) when absent, Err on shape mismatch
#[tokio::test]
async fn reads_typed_sections() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    let roles: Option<Vec<String>> = store.section("permissions.allowed_role_ids").await?;
    assert_eq!(roles, Some(vec![fixture::document::ALLOWED_ROLE_ID.to_string()]));

    let missing: Option<Vec<String>> = store.section("permissions.nope").await?;
    assert!(missing.is_none());

    let mismatch = store.section::<Vec<String>>("channels").await;
    assert!(matches!(mismatch, Err(ConfigError::Serialize { .. })));

    Ok(())
}
