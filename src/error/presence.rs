use thiserror::Error;

use crate::error::platform::PlatformError;

#[derive(Error, Debug)]
pub enum PresenceError {
    /// A Streaming activity was requested without a valid Twitch URL.
    ///
    /// Rejected before the session is touched or anything is persisted.
    #[error("Streaming activity requires a Twitch URL, got {0:?}")]
    InvalidStreamingUrl(Option<String>),

    /// The activity name was empty.
    #[error("Activity name must not be empty")]
    InvalidActivityName,

    /// The platform refused the presence update. Nothing was persisted.
    #[error("Failed to apply presence to the session: {0}")]
    Apply(#[source] PlatformError),
}
