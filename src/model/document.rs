//! Typed views of configuration document sections.
//!
//! The document itself stays schemaless (see `data::config_store`); these structs are
//! read on demand with `ConfigStore::section` and never written back wholesale, so
//! unknown keys inside a section survive every update.

use serde::Deserialize;

/// Section paths used across the bot.
pub mod path {
    pub const BOT_TOKEN: &str = "bot.token";
    pub const JOIN_LOG_CHANNEL: &str = "channels.join_log";
    pub const LEAVE_LOG_CHANNEL: &str = "channels.leave_log";
    pub const GUILD_ID: &str = "guild_id";
    pub const ALLOWED_ROLE_IDS: &str = "permissions.allowed_role_ids";
    pub const BOT_PRESENCE: &str = "bot_presence";
    pub const JOIN_EMBED: &str = "events.guildMemberAdd.embed";
    pub const JOIN_FALLBACK: &str = "fallback_messages.join";
    pub const LEAVE_MESSAGE: &str = "fallback_messages.leave";
}

/// `events.guildMemberAdd.embed`: the welcome embed template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmbedTemplate {
    /// Title template; supports `{eye_emoji}` and `{bot_name}`.
    pub title: String,
    /// Description template; supports `{username}`.
    pub description: String,
    /// Custom emoji id substituted for `{eye_emoji}`.
    #[serde(default)]
    pub eye_emoji_id: Option<String>,
    /// Icon shown next to the bot name in the embed author line.
    #[serde(default)]
    pub author_icon_url: Option<String>,
}
