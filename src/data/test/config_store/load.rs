use super::*;

/// Tests loading a well-formed document.
///
/// Verifies that the store exposes the document exactly as written to disk.
///
/// Expected: Ok with document equal to the fixture
#[tokio::test]
async fn loads_document_from_disk() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();

    let store = ConfigStore::load(&test.config_path, json!({})).await?;

    assert_eq!(store.document().await, fixture::document::config_document());
    assert_eq!(store.path(), test.config_path.as_path());

    Ok(())
}

/// Tests loading from a path that does not exist.
///
/// Expected: Err(ConfigError::Load)
#[tokio::test]
async fn fails_when_file_is_missing() {
    let test = TestBuilder::new().build().unwrap();
    let missing = test.dir.path().join("missing.json");

    let result = ConfigStore::load(&missing, json!({})).await;

    assert!(matches!(result, Err(ConfigError::Load { .. })));
}

/// Tests loading a file that is not JSON.
///
/// Expected: Err(ConfigError::Parse)
#[tokio::test]
async fn fails_when_file_is_not_json() {
    let test = TestBuilder::new()
        .with_raw_contents("{ this is not json")
        .build()
        .unwrap();

    let result = ConfigStore::load(&test.config_path, json!({})).await;

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

/// Tests loading a JSON document whose root is an array.
///
/// Expected: Err(ConfigError::NotAnObject)
#[tokio::test]
async fn fails_when_root_is_not_an_object() {
    let test = TestBuilder::new().with_raw_contents("[1, 2, 3]").build().unwrap();

    let result = ConfigStore::load(&test.config_path, json!({})).await;

    assert!(matches!(result, Err(ConfigError::NotAnObject(_))));
}

/// Tests that a non-object overlay is ignored rather than rejected.
///
/// Expected: Ok with file values visible
#[tokio::test]
async fn ignores_non_object_overlay() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();

    let store = ConfigStore::load(&test.config_path, Value::Null).await?;

    assert_eq!(
        store.get_str("guild_id").await.as_deref(),
        Some(fixture::document::GUILD_ID)
    );

    Ok(())
}
