use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use crate::error::config::ConfigError;

/// Durable JSON configuration document with an environment overlay.
///
/// The store owns the single authoritative in-memory copy of the document. Reads
/// resolve a dotted path (`"channels.join_log"`) against the document, with values from
/// the environment overlay taking precedence. Updates are staged on a copy, written to
/// disk with an atomic replace, and only then committed to memory, so readers never
/// observe a value that is not durable and a failed write leaves memory untouched.
///
/// All writers are serialized by `write_lock`; concurrent updates to the same or to
/// different sections cannot lose each other.
pub struct ConfigStore {
    path: PathBuf,
    state: RwLock<StoreState>,
    write_lock: Mutex<()>,
}

struct StoreState {
    /// Document exactly as persisted on disk.
    document: Value,
    /// Environment-derived values layered over `document`. Never persisted.
    overlay: Value,
}

impl ConfigStore {
    /// Loads the configuration document from disk.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON document
    /// - `overlay` - Object of environment overrides, same shape as the document
    ///
    /// # Returns
    /// - `Ok(ConfigStore)` - Document loaded
    /// - `Err(ConfigError::Load)` - File missing or unreadable
    /// - `Err(ConfigError::Parse)` - File is not valid JSON
    /// - `Err(ConfigError::NotAnObject)` - Document root is not a JSON object
    pub async fn load(path: impl Into<PathBuf>, overlay: Value) -> Result<Self, ConfigError> {
        let path = path.into();

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Load {
                path: path.clone(),
                source,
            })?;

        let document: Value =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        if !document.is_object() {
            return Err(ConfigError::NotAnObject(path));
        }

        let overlay = if overlay.is_object() {
            overlay
        } else {
            Value::Object(Map::new())
        };

        tracing::info!("Loaded configuration document from {}", path.display());

        Ok(Self {
            path,
            state: RwLock::new(StoreState { document, overlay }),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value at a dotted section path.
    ///
    /// Overlay values win over document values. When both sides hold an object at the
    /// path, the result is the document object with the overlay merged on top.
    ///
    /// # Returns
    /// - `Some(Value)` - The (merged) value at the path, which may be `Value::Null`
    /// - `None` - Nothing is configured at the path
    pub async fn get(&self, path: &str) -> Option<Value> {
        let segments = split_path(path).ok()?;
        let state = self.state.read().await;

        let base = lookup(&state.document, &segments);
        let over = lookup(&state.overlay, &segments);

        match (base, over) {
            (Some(base), Some(over)) => Some(merged(base, over)),
            (Some(base), None) => Some(base.clone()),
            (None, Some(over)) => Some(over.clone()),
            (None, None) => None,
        }
    }

    /// Reads a string value, treating `null` and empty strings as unset.
    pub async fn get_str(&self, path: &str) -> Option<String> {
        match self.get(path).await? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Reads and deserializes a section.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Section present and well formed
    /// - `Ok(None)` - Section absent or `null`
    /// - `Err(ConfigError::Serialize)` - Section present but does not match `T`
    pub async fn section<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ConfigError> {
        match self.get(path).await {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| ConfigError::Serialize {
                    path: path.to_string(),
                    source,
                }),
        }
    }

    /// Snapshot of the persisted document, without overlay values.
    pub async fn document(&self) -> Value {
        self.state.read().await.document.clone()
    }

    /// Replaces the value at a dotted path and persists the whole document.
    ///
    /// Missing intermediate objects are created. The new document is written to a
    /// temporary file beside the target, flushed, and renamed over the target; the
    /// in-memory document only changes once the rename succeeded. Any overlay value at
    /// or below the path is dropped so the runtime change is visible through `get`.
    ///
    /// # Arguments
    /// - `path` - Dotted section path, e.g. `"bot_presence"`
    /// - `value` - New section value
    ///
    /// # Returns
    /// - `Ok(())` - The document on disk and in memory both hold the new value
    /// - `Err(ConfigError::InvalidPath)` - Empty path or a non-object intermediate
    /// - `Err(ConfigError::Serialize)` - The value could not be converted to JSON
    /// - `Err(ConfigError::Persist)` - The write failed; memory is unchanged
    pub async fn update_and_persist<T: Serialize>(
        &self,
        path: &str,
        value: T,
    ) -> Result<(), ConfigError> {
        let segments = split_path(path)?;
        let value = serde_json::to_value(value).map_err(|source| ConfigError::Serialize {
            path: path.to_string(),
            source,
        })?;

        let _writer = self.write_lock.lock().await;

        let mut staged = self.state.read().await.document.clone();
        set_at(&mut staged, &segments, value)
            .ok_or_else(|| ConfigError::InvalidPath(path.to_string()))?;

        let serialized =
            serde_json::to_string_pretty(&staged).map_err(|source| ConfigError::Serialize {
                path: path.to_string(),
                source,
            })?;

        if let Err(source) = write_atomic(&self.path, serialized.as_bytes()).await {
            tracing::error!(
                "Failed to persist configuration update to '{}': {}",
                path,
                source
            );
            return Err(ConfigError::Persist {
                path: self.path.clone(),
                source,
            });
        }

        let mut state = self.state.write().await;
        state.document = staged;
        remove_at(&mut state.overlay, &segments);

        tracing::debug!("Persisted configuration section '{}'", path);

        Ok(())
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, ConfigError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ConfigError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

fn lookup<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| current.as_object()?.get(*segment))
}

/// Recursively layers `over` on top of `base`. Non-object values in `over` win.
fn merged(base: &Value, over: &Value) -> Value {
    match (base, over) {
        (Value::Object(base), Value::Object(over)) => {
            let mut result = base.clone();
            for (key, over_value) in over {
                let value = match base.get(key) {
                    Some(base_value) => merged(base_value, over_value),
                    None => over_value.clone(),
                };
                result.insert(key.clone(), value);
            }
            Value::Object(result)
        }
        (_, over) => over.clone(),
    }
}

/// Sets `value` at `segments`, creating missing objects.
///
/// Returns `None` if an existing intermediate value is not an object.
fn set_at(root: &mut Value, segments: &[&str], value: Value) -> Option<()> {
    let (last, parents) = segments.split_last()?;
    let mut current = root;

    for segment in parents {
        let object = current.as_object_mut()?;
        current = object
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    current.as_object_mut()?.insert(last.to_string(), value);
    Some(())
}

fn remove_at(root: &mut Value, segments: &[&str]) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        match current.as_object_mut().and_then(|o| o.get_mut(*segment)) {
            Some(next) => current = next,
            None => return,
        }
    }

    if let Some(object) = current.as_object_mut() {
        object.remove(*last);
    }
}

/// Writes `contents` to `path` through a sibling temporary file and a rename.
async fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "config.json".into());
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = write_and_rename(&tmp_path, path, contents).await;

    if result.is_err() {
        let _ = tokio::fs::remove_file(&tmp_path).await;
    }

    result
}

async fn write_and_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(tmp_path).await?;
    file.write_all(contents).await?;
    file.write_all(b"\n").await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(tmp_path, path).await
}
