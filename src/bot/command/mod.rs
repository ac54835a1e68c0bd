//! Built-in slash commands.
//!
//! Both commands are privileged and reply ephemerally. They change the bot presence
//! through `PresenceController`, which persists the result for restarts.

pub mod setactivity;
pub mod setstatus;

use std::sync::Arc;

use crate::bot::registry::CommandHandler;

/// All built-in command handlers, in registration order.
pub fn definitions() -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(setactivity::SetActivity),
        Arc::new(setstatus::SetStatus),
    ]
}
