//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The event is
//! forwarded to the registered `ready` listeners, which restore the persisted presence
//! and deploy the slash commands.

use serenity::all::{Context, Ready};

use crate::bot::platform::DiscordPlatform;
use crate::bot::registry::EventContext;
use crate::model::event::{BotEvent, ReadyEvent};
use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Application state holding the store and registry
/// - `ctx` - Discord context for presence updates and command deployment
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    let event = BotEvent::Ready(ReadyEvent {
        bot_id: ready.user.id.get(),
        bot_name: ready.user.name.clone(),
        guild_count: ready.guilds.len(),
    });

    let platform = DiscordPlatform::new(ctx);
    let event_ctx = EventContext {
        state,
        platform: &platform,
    };

    state.registry.dispatch_event(event_ctx, &event).await;
}
