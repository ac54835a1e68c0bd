use serde_json::{json, Value};

pub const BOT_TOKEN: &str = "test-token";
pub const GUILD_ID: &str = "100000000000000001";
pub const JOIN_CHANNEL_ID: &str = "200000000000000001";
pub const LEAVE_CHANNEL_ID: &str = "200000000000000002";
pub const ALLOWED_ROLE_ID: &str = "300000000000000001";
pub const EYE_EMOJI_ID: &str = "400000000000000001";
pub const AUTHOR_ICON_URL: &str = "https://cdn.example.com/eye.png";

/// Creates a configuration document with every known section populated.
///
/// Presence starts as `online` / `Watching the gates`. Templates use every supported
/// placeholder so rendering can be asserted end to end.
///
/// # Returns
/// - `Value` - The document as a JSON object
pub fn config_document() -> Value {
    json!({
        "bot": { "token": BOT_TOKEN },
        "channels": {
            "join_log": JOIN_CHANNEL_ID,
            "leave_log": LEAVE_CHANNEL_ID
        },
        "guild_id": GUILD_ID,
        "permissions": { "allowed_role_ids": [ALLOWED_ROLE_ID] },
        "bot_presence": {
            "status": "online",
            "activity": { "type": "Watching", "name": "the gates", "url": null }
        },
        "events": {
            "guildMemberAdd": {
                "embed": {
                    "title": "{eye_emoji} {bot_name} sees you",
                    "description": "Welcome, {username}.",
                    "eye_emoji_id": EYE_EMOJI_ID,
                    "author_icon_url": AUTHOR_ICON_URL
                }
            }
        },
        "fallback_messages": {
            "join": "Welcome {user} to {server.name}!",
            "leave": "**{username}** has left {server.name}."
        }
    })
}
