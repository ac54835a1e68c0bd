//! Ready listener for bot initialization.
//!
//! Runs once, on the first `ready` event after the gateway handshake. Reconnects fire
//! `ready` again, but presence and commands only need to be set up once per process.

use serenity::async_trait;

use crate::bot::platform::CommandDeployer;
use crate::bot::registry::{EventContext, EventDefinition, EventListener};
use crate::error::AppError;
use crate::model::{
    document::path,
    event::{BotEvent, EventKind},
};
use crate::service::PresenceController;
use crate::util::parse::parse_snowflake;

pub struct Ready;

#[async_trait]
impl EventListener for Ready {
    fn definition(&self) -> EventDefinition {
        EventDefinition::once(EventKind::Ready)
    }

    /// Restores the persisted presence and deploys the registered commands.
    ///
    /// A presence that cannot be restored is logged and does not prevent command
    /// deployment.
    ///
    /// # Returns
    /// - `Ok(())` - Setup finished, or deployment skipped for lack of a guild id
    /// - `Err(AppError)` - Invalid guild id or command deployment failed
    async fn execute(&self, ctx: EventContext<'_>, event: &BotEvent) -> Result<(), AppError> {
        let BotEvent::Ready(ready) = event else {
            return Ok(());
        };

        tracing::info!(
            "Ready! Logged in as {} ({}), serving {} guild(s)",
            ready.bot_name,
            ready.bot_id,
            ready.guild_count
        );

        if let Err(e) = PresenceController::new(&ctx.state.store, ctx.platform)
            .restore_from_config()
            .await
        {
            tracing::error!("Failed to restore bot presence: {}", e);
        }

        let Some(guild_id) = parse_snowflake(ctx.state.store.get(path::GUILD_ID).await.as_ref())?
        else {
            tracing::warn!("No guild id configured; skipping slash command deployment");
            return Ok(());
        };

        let definitions = ctx.state.registry.command_definitions();
        tracing::info!(
            "Started refreshing {} application (/) commands for guild {}",
            definitions.len(),
            guild_id
        );

        let deployed = ctx.platform.deploy_commands(guild_id, &definitions).await?;

        tracing::info!(
            "Successfully reloaded {} application (/) commands for guild {}",
            deployed,
            guild_id
        );

        Ok(())
    }
}
