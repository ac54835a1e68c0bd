//! Error types and user-facing message mapping.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum is the
//! top-level error type that wraps the domain-specific errors of each component.
//! Command failures are turned into chat replies through `AppError::user_message`:
//! recoverable domain errors carry a specific message, everything else collapses to
//! the generic command error so internals never leak to Discord users.

pub mod config;
pub mod dispatch;
pub mod internal;
pub mod notification;
pub mod platform;
pub mod presence;

use thiserror::Error;

use crate::error::{
    config::ConfigError, dispatch::DispatchError, internal::InternalError,
    notification::NotificationError, platform::PlatformError, presence::PresenceError,
};

/// Reply sent for any command failure that has no specific user-facing message.
pub const GENERIC_COMMAND_ERROR: &str = "There was an error while executing this command!";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration document or environment error.
    ///
    /// Fatal during startup; recoverable (rolled back) for runtime updates.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command resolution or option parsing error.
    #[error(transparent)]
    DispatchErr(#[from] DispatchError),

    /// Presence validation or application error.
    #[error(transparent)]
    PresenceErr(#[from] PresenceError),

    /// Membership notification delivery error.
    #[error(transparent)]
    NotificationErr(#[from] NotificationError),

    /// Outbound platform call error.
    #[error(transparent)]
    PlatformErr(#[from] PlatformError),

    /// Unexpected internal condition.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size. Raised while building or running the gateway client.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps recoverable domain errors to the reply shown to the invoking user.
    ///
    /// # Returns
    /// - `Some(message)` - The error is an expected, user-correctable or reportable outcome
    /// - `None` - The error is internal; callers reply with `GENERIC_COMMAND_ERROR`
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::PresenceErr(PresenceError::InvalidStreamingUrl(_)) => Some(
                "For \"Streaming\" activity, you must provide a valid Twitch URL.".to_string(),
            ),
            Self::PresenceErr(PresenceError::InvalidActivityName) => {
                Some("The activity name must not be empty.".to_string())
            }
            Self::PresenceErr(PresenceError::Apply(_)) => {
                Some("Failed to update bot presence. Check console for errors.".to_string())
            }
            Self::ConfigErr(ConfigError::Persist { .. }) => Some(
                "Failed to save the new presence, no changes were kept. Check console for errors."
                    .to_string(),
            ),
            Self::DispatchErr(DispatchError::MissingOption(option)) => {
                Some(format!("Missing required option `{}`.", option))
            }
            Self::DispatchErr(DispatchError::InvalidOption { option, value }) => {
                Some(format!("`{}` is not a valid value for `{}`.", value, option))
            }
            _ => None,
        }
    }
}
