//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::user::user_json;

/// Creates a test Serenity Member of a guild.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username
/// - `guild_id` - Guild the member belongs to
/// - `role_ids` - Roles held by the member
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(1, "ana", 100, &[300, 301]);
/// assert_eq!(member.roles.len(), 2);
/// ```
pub fn create_test_member(user_id: u64, username: &str, guild_id: u64, role_ids: &[u64]) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, username),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
