use super::*;
use std::sync::Arc;

/// Tests concurrent updates to different sections.
///
/// Spawns writers for two sections at once and verifies that the final document
/// holds both values, i.e. neither write was lost.
///
/// Expected: Ok with both values on disk and in memory
#[tokio::test]
async fn concurrent_updates_are_not_lost() -> Result<(), ConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = Arc::new(ConfigStore::load(&test.config_path, json!({})).await?);

    let mut tasks = Vec::new();
    for i in 0..10u32 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            let path = if i % 2 == 0 { "counters.even" } else { "counters.odd" };
            store.update_and_persist(&format!("{}.n{}", path, i), i).await
        }));
    }
    for task in tasks {
        task.await.unwrap()?;
    }

    let on_disk = test.read_document().unwrap();
    for i in 0..10u32 {
        let parent = if i % 2 == 0 { "even" } else { "odd" };
        assert_eq!(on_disk["counters"][parent][format!("n{}", i)], json!(i));
    }
    assert_eq!(on_disk, store.document().await);

    Ok(())
}
