use serde_json::{Map, Value};

use crate::{context::TestContext, error::TestError, fixture};

/// File name of the document inside the temporary directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Builder for creating test contexts with a customizable configuration document.
///
/// Starts from `fixture::document::config_document()`. Sections can be replaced or
/// removed by dotted path before `build()` writes the document to a fresh temporary
/// directory.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_section("bot_presence.status", json!("idle"))
///     .without_section("fallback_messages.join")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Document to serialize into the context.
    document: Value,

    /// Raw file contents overriding `document`, for malformed-input tests.
    raw_contents: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with the full fixture document.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            document: fixture::document::config_document(),
            raw_contents: None,
        }
    }

    /// Sets the value at a dotted path, creating missing objects.
    ///
    /// # Arguments
    /// - `path` - Dotted section path, e.g. `"channels.join_log"`
    /// - `value` - Value to store at the path
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Panics
    /// - If the path crosses a value that is not an object (invalid test setup)
    pub fn with_section(mut self, path: &str, value: Value) -> Self {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().expect("empty section path");

        let mut current = &mut self.document;
        for segment in parents {
            current = current
                .as_object_mut()
                .expect("section path crosses a non-object value")
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        current
            .as_object_mut()
            .expect("section path crosses a non-object value")
            .insert(last.to_string(), value);

        self
    }

    /// Removes the value at a dotted path if present.
    ///
    /// # Arguments
    /// - `path` - Dotted section path to remove
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn without_section(mut self, path: &str) -> Self {
        let segments: Vec<&str> = path.split('.').collect();
        if let Some((last, parents)) = segments.split_last() {
            let mut current = Some(&mut self.document);
            for segment in parents {
                current = current.and_then(|value| value.get_mut(*segment));
            }
            if let Some(Value::Object(object)) = current {
                object.remove(*last);
            }
        }
        self
    }

    /// Writes the given text instead of the serialized document.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, typically invalid JSON
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_contents(mut self, contents: &str) -> Self {
        self.raw_contents = Some(contents.to_string());
        self
    }

    /// Builds the test context.
    ///
    /// Creates a temporary directory and writes the configured document into it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the document on disk
    /// - `Err(TestError::Io)` - Failed to create the directory or file
    /// - `Err(TestError::Json)` - Failed to serialize the document
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let contents = match self.raw_contents {
            Some(raw) => raw,
            None => serde_json::to_string_pretty(&self.document)?,
        };
        std::fs::write(&config_path, contents)?;

        Ok(TestContext { dir, config_path })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
