use serenity::all::{Context, GuildId, Member, Mentionable, User};

use crate::bot::platform::DiscordPlatform;
use crate::bot::registry::EventContext;
use crate::model::event::{BotEvent, MemberEvent};
use crate::state::AppState;

/// Guild name used when neither the cache nor the API knows the guild.
pub const UNKNOWN_SERVER: &str = "Unknown server";

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    let guild_name = resolve_guild_name(&ctx, new_member.guild_id).await;
    let event = BotEvent::MemberJoined(member_event(
        &new_member.user,
        new_member.guild_id.get(),
        guild_name,
    ));

    dispatch(state, ctx, event).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &AppState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let guild_name = resolve_guild_name(&ctx, guild_id).await;
    let event = BotEvent::MemberLeft(member_event(&user, guild_id.get(), guild_name));

    dispatch(state, ctx, event).await;
}

async fn dispatch(state: &AppState, ctx: Context, event: BotEvent) {
    let platform = DiscordPlatform::new(ctx);
    let event_ctx = EventContext {
        state,
        platform: &platform,
    };

    state.registry.dispatch_event(event_ctx, &event).await;
}

/// Reduces a Discord user to the fields membership notifications use.
///
/// # Arguments
/// - `user` - The member's user account
/// - `guild_id` - Guild the membership changed in
/// - `guild_name` - Resolved guild name
///
/// # Returns
/// - `MemberEvent` - Platform-agnostic member data
pub fn member_event(user: &User, guild_id: u64, guild_name: String) -> MemberEvent {
    MemberEvent {
        user_id: user.id.get(),
        username: user.name.clone(),
        tag: user.tag(),
        mention: user.mention().to_string(),
        guild_id,
        guild_name,
    }
}

/// Resolves a guild name from the cache, then the API, else `UNKNOWN_SERVER`.
async fn resolve_guild_name(ctx: &Context, guild_id: GuildId) -> String {
    if let Some(name) = guild_id.name(&ctx.cache) {
        return name;
    }

    match guild_id.to_partial_guild(ctx).await {
        Ok(guild) => guild.name,
        Err(e) => {
            tracing::warn!("Failed to resolve name of guild {}: {}", guild_id, e);
            UNKNOWN_SERVER.to_string()
        }
    }
}
