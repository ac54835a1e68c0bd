use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use crate::bot::platform::mock::RecordingPlatform;
use crate::data::ConfigStore;

mod presence;

/// Builds a context from `builder` and loads a store over it without overlay.
async fn load_store(builder: TestBuilder) -> (TestContext, ConfigStore) {
    let test = builder.build().unwrap();
    let store = ConfigStore::load(&test.config_path, json!({}))
        .await
        .unwrap();
    (test, store)
}

fn id(value: &str) -> u64 {
    value.parse().unwrap()
}

/// Reads a dotted path from the document on disk.
fn document_section(test: &TestContext, path: &str) -> Value {
    path.split('.')
        .fold(test.read_document().unwrap(), |value, segment| {
            value.get(segment).cloned().unwrap_or(Value::Null)
        })
}
