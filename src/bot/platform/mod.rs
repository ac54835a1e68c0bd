//! Outbound capabilities the bot needs from Discord.
//!
//! Services depend on these traits instead of Serenity's `Context`, which keeps the
//! presence and notification logic testable without a gateway connection.
//! `DiscordPlatform` is the Serenity-backed implementation used at runtime.

pub mod discord;
#[cfg(test)]
pub mod mock;

use serenity::async_trait;

use crate::error::platform::PlatformError;
use crate::model::{command::CommandDefinition, presence::Presence};

pub use discord::DiscordPlatform;

/// Author line of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: String,
}

/// Rich embed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPayload {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub author: Option<EmbedAuthor>,
}

/// A message to deliver to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text(String),
    Embed(EmbedPayload),
}

/// Sets the presence of the live bot session.
#[async_trait]
pub trait PresenceSession: Send + Sync {
    async fn set_presence(&self, presence: &Presence) -> Result<(), PlatformError>;
}

/// Sends messages to guild channels.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, channel_id: u64, message: &OutboundMessage) -> Result<(), PlatformError>;
}

/// Publishes slash command definitions to a guild.
#[async_trait]
pub trait CommandDeployer: Send + Sync {
    /// Replaces the guild's commands and returns how many Discord accepted.
    async fn deploy_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDefinition],
    ) -> Result<usize, PlatformError>;
}

/// Everything a handler may do on Discord.
pub trait Platform: PresenceSession + MessageSink + CommandDeployer {
    /// Username of the bot account.
    fn bot_name(&self) -> String;
}
