//! Discord bot integration.
//!
//! This module binds the platform-agnostic services to Serenity. Gateway events arrive
//! in `handler`, are converted to domain events and invocations, and are routed through
//! the `registry` to the built-in `command`s and `event` listeners. Outbound calls go
//! through the `platform` traits so everything above them can be tested without a
//! gateway connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and slash command interactions
//! - `GUILD_MEMBERS` - Receive member join and leave events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod dispatcher;
pub mod event;
pub mod handler;
pub mod platform;
pub mod registry;
pub mod response;
pub mod start;
