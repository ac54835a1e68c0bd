use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document could not be read from disk.
    ///
    /// Fatal during startup: the bot cannot run without its document.
    #[error("Failed to read configuration document at {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document exists but is not valid JSON.
    #[error("Failed to parse configuration document at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration document parsed, but its root is not a JSON object.
    #[error("Configuration document at {0} must be a JSON object")]
    NotAnObject(PathBuf),

    /// Writing the updated document back to disk failed.
    ///
    /// The in-memory document is left exactly as it was before the update.
    #[error("Failed to persist configuration document to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A section path was empty or crossed a value that is not an object.
    #[error("Invalid configuration path '{0}'")]
    InvalidPath(String),

    /// A section could not be converted to or from its typed representation.
    #[error("Failed to convert configuration section '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required value is set neither in the environment nor in the document.
    #[error("Missing required configuration value: {0}")]
    MissingValue(String),

    /// An environment override could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
