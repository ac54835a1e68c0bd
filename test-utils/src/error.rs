use thiserror::Error;

/// Errors that can occur while setting up or inspecting a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Filesystem error creating the temporary directory or document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The document on disk could not be serialized or parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
