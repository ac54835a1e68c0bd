use thiserror::Error;

use crate::error::platform::PlatformError;

#[derive(Error, Debug)]
pub enum NotificationError {
    /// The template for the notification is absent from the document.
    #[error("Missing message template at '{0}'")]
    MissingTemplate(String),

    /// The message could not be delivered to the channel.
    #[error("Failed to send notification to channel {channel_id}: {source}")]
    Send {
        channel_id: u64,
        #[source]
        source: PlatformError,
    },
}
