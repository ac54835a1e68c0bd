//! Bot presence: online status plus optional activity.
//!
//! `Presence` is the validated, typed form used by the controller and the Discord
//! binding. It serializes to the `bot_presence` section of the configuration document:
//!
//! ```json
//! { "status": "idle", "activity": { "type": "Playing", "name": "Chess", "url": null } }
//! ```
//!
//! `StoredPresence` is the tolerant form read back at startup, where a stored value may
//! no longer map to a known status or activity type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Online status shown next to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Online,
    Idle,
    Dnd,
    Invisible,
}

impl BotStatus {
    pub const ALL: [BotStatus; 4] = [
        BotStatus::Online,
        BotStatus::Idle,
        BotStatus::Dnd,
        BotStatus::Invisible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Invisible => "invisible",
        }
    }

    /// Label shown in the slash command choice list.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Idle => "Idle",
            Self::Dnd => "Do Not Disturb",
            Self::Invisible => "Invisible",
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BotStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Kind of rich-presence activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Playing,
    Watching,
    Listening,
    Competing,
    Streaming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Playing,
        ActivityKind::Watching,
        ActivityKind::Listening,
        ActivityKind::Competing,
        ActivityKind::Streaming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Watching => "Watching",
            Self::Listening => "Listening",
            Self::Competing => "Competing",
            Self::Streaming => "Streaming",
        }
    }

    /// Label shown in the slash command choice list.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Watching => "Watching",
            Self::Listening => "Listening to",
            Self::Competing => "Competing in",
            Self::Streaming => "Streaming (Requires URL)",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Activity displayed under the bot's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub name: String,
    /// Stream URL; only meaningful for `ActivityKind::Streaming`. Serialized as `null`
    /// when unset so the persisted document always carries the key.
    #[serde(default)]
    pub url: Option<String>,
}

impl Activity {
    pub fn new(kind: ActivityKind, name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            url,
        }
    }
}

/// Full presence as applied to the session and persisted to `bot_presence`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Presence {
    pub status: BotStatus,
    #[serde(default)]
    pub activity: Option<Activity>,
}

impl Presence {
    pub fn new(status: BotStatus, activity: Option<Activity>) -> Self {
        Self { status, activity }
    }
}

/// `bot_presence` exactly as found in the document, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredPresence {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub activity: Option<StoredActivity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredActivity {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
