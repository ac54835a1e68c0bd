//! Process configuration read from the environment.
//!
//! The bot's durable settings live in the JSON document managed by `ConfigStore`.
//! Environment variables only choose where that document is and optionally override
//! some of its values for this process. Overrides are layered over the document and
//! never written back to it.

use serde_json::{json, Map, Value};
use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Values taken from environment variables. Empty variables count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `DISCORD_TOKEN` -> `bot.token`
    pub token: Option<String>,
    /// `JOIN_LOG_CHANNEL_ID` -> `channels.join_log`
    pub join_log_channel: Option<u64>,
    /// `LEAVE_LOG_CHANNEL_ID` -> `channels.leave_log`
    pub leave_log_channel: Option<u64>,
    /// `GUILD_ID` -> `guild_id`
    pub guild_id: Option<u64>,
    /// `ALLOWED_ROLE_ID` -> `permissions.allowed_role_ids`
    pub allowed_role_id: Option<u64>,
    /// `BOT_STATUS` -> `bot_presence.status`
    pub status: Option<String>,
    /// `BOT_ACTIVITY_TYPE` -> `bot_presence.activity.type`
    pub activity_type: Option<String>,
    /// `BOT_ACTIVITY_NAME` -> `bot_presence.activity.name`
    pub activity_name: Option<String>,
    /// `BOT_ACTIVITY_URL` -> `bot_presence.activity.url`
    pub activity_url: Option<String>,
}

pub struct Config {
    pub config_path: PathBuf,
    pub overrides: EnvOverrides,
}

impl Config {
    /// Reads the process configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first so a `.env` file is taken into account.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration read
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An id variable is not a valid id
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the process configuration through `lookup` instead of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let id = |name: &str| -> Result<Option<u64>, ConfigError> {
            var(name)
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|id| *id != 0)
                        .ok_or_else(|| ConfigError::InvalidEnvVar {
                            name: name.to_string(),
                            value,
                        })
                })
                .transpose()
        };

        Ok(Self {
            config_path: var("CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
            overrides: EnvOverrides {
                token: var("DISCORD_TOKEN"),
                join_log_channel: id("JOIN_LOG_CHANNEL_ID")?,
                leave_log_channel: id("LEAVE_LOG_CHANNEL_ID")?,
                guild_id: id("GUILD_ID")?,
                allowed_role_id: id("ALLOWED_ROLE_ID")?,
                status: var("BOT_STATUS"),
                activity_type: var("BOT_ACTIVITY_TYPE"),
                activity_name: var("BOT_ACTIVITY_NAME"),
                activity_url: var("BOT_ACTIVITY_URL"),
            },
        })
    }
}

impl EnvOverrides {
    /// Builds the overlay document for `ConfigStore::load`.
    ///
    /// Only set variables appear in the overlay. Ids are stored as strings, matching the
    /// document format.
    pub fn to_overlay(&self) -> Value {
        let mut overlay = Map::new();

        if let Some(token) = &self.token {
            overlay.insert("bot".to_string(), json!({ "token": token }));
        }

        let mut channels = Map::new();
        if let Some(id) = self.join_log_channel {
            channels.insert("join_log".to_string(), json!(id.to_string()));
        }
        if let Some(id) = self.leave_log_channel {
            channels.insert("leave_log".to_string(), json!(id.to_string()));
        }
        if !channels.is_empty() {
            overlay.insert("channels".to_string(), Value::Object(channels));
        }

        if let Some(id) = self.guild_id {
            overlay.insert("guild_id".to_string(), json!(id.to_string()));
        }
        if let Some(id) = self.allowed_role_id {
            overlay.insert(
                "permissions".to_string(),
                json!({ "allowed_role_ids": [id.to_string()] }),
            );
        }

        let mut activity = Map::new();
        if let Some(kind) = &self.activity_type {
            activity.insert("type".to_string(), json!(kind));
        }
        if let Some(name) = &self.activity_name {
            activity.insert("name".to_string(), json!(name));
        }
        if let Some(url) = &self.activity_url {
            activity.insert("url".to_string(), json!(url));
        }

        let mut presence = Map::new();
        if let Some(status) = &self.status {
            presence.insert("status".to_string(), json!(status));
        }
        if !activity.is_empty() {
            presence.insert("activity".to_string(), Value::Object(activity));
        }
        if !presence.is_empty() {
            overlay.insert("bot_presence".to_string(), Value::Object(presence));
        }

        Value::Object(overlay)
    }
}
