use thiserror::Error;

/// Failures reported by the outbound Discord capabilities.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Discord error code 50001: the bot cannot view or send in the channel.
    #[error("Missing access to channel {0}")]
    MissingAccess(u64),

    /// Discord error code 10003: the channel id is invalid or not visible.
    #[error("Unknown channel {0}")]
    UnknownChannel(u64),

    /// The channel exists but cannot receive text messages.
    #[error("Channel {0} is not a text channel")]
    NotTextChannel(u64),

    /// Serenity refused the activity URL while building the presence.
    #[error("Invalid activity URL {0:?}")]
    InvalidActivityUrl(Option<String>),
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        PlatformError::Discord(Box::new(err))
    }
}

impl PlatformError {
    /// Operator hint for well-known Discord failures, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingAccess(_) => {
                Some("Bot might be missing permissions to view/send messages in the channel.")
            }
            Self::UnknownChannel(_) => {
                Some("The configured channel id is invalid or the bot cannot see it.")
            }
            Self::NotTextChannel(_) => Some("Is the configured channel a text channel?"),
            _ => None,
        }
    }
}
