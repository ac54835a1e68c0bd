//! Gateway events delivered to registered listeners.
//!
//! `EventKind` is the closed set of events a listener may subscribe to, keyed by the
//! Discord.js-style event names used in listener definitions and in the `events.*`
//! configuration sections. `BotEvent` carries the payload, already reduced to
//! platform-agnostic data.

use std::fmt;
use std::str::FromStr;

/// Event a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    GuildMemberAdd,
    GuildMemberRemove,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::GuildMemberAdd => "guildMemberAdd",
            Self::GuildMemberRemove => "guildMemberRemove",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Ready, Self::GuildMemberAdd, Self::GuildMemberRemove]
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A member joining or leaving a guild, reduced to what notifications need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEvent {
    /// Discord user id of the member.
    pub user_id: u64,
    /// Plain username, used for `{username}`.
    pub username: String,
    /// Display tag of the member, used in logs.
    pub tag: String,
    /// Mention markup (`<@id>`), used for `{user}`.
    pub mention: String,
    /// Guild the membership change happened in.
    pub guild_id: u64,
    /// Guild name, used for `{server.name}`.
    pub guild_name: String,
}

/// Information about the bot session, delivered once the gateway is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyEvent {
    /// Bot user id.
    pub bot_id: u64,
    /// Bot username.
    pub bot_name: String,
    /// Number of guilds the bot is in.
    pub guild_count: usize,
}

/// An inbound gateway event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    Ready(ReadyEvent),
    MemberJoined(MemberEvent),
    MemberLeft(MemberEvent),
}

impl BotEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Ready(_) => EventKind::Ready,
            Self::MemberJoined(_) => EventKind::GuildMemberAdd,
            Self::MemberLeft(_) => EventKind::GuildMemberRemove,
        }
    }
}
