use serenity::async_trait;

use crate::bot::registry::{CommandContext, CommandHandler};
use crate::error::{dispatch::DispatchError, AppError};
use crate::model::{
    command::{CommandDefinition, OptionSpec},
    presence::BotStatus,
};
use crate::service::PresenceController;

/// `/setstatus status:<online|idle|dnd|invisible>`
pub struct SetStatus;

#[async_trait]
impl CommandHandler for SetStatus {
    fn definition(&self) -> CommandDefinition {
        let option = BotStatus::ALL.iter().fold(
            OptionSpec::string("status", "The status to set (online, idle, dnd, invisible)")
                .required(true),
            |option, status| option.choice(status.label(), status.as_str()),
        );

        CommandDefinition::new("setstatus", "Sets the bot's online status.")
            .option(option)
            .privileged()
            .ephemeral()
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, AppError> {
        let value = ctx.invocation.required_string("status")?;
        let status = value
            .parse::<BotStatus>()
            .map_err(|value| DispatchError::InvalidOption {
                option: "status".to_string(),
                value,
            })?;

        PresenceController::new(&ctx.state.store, ctx.platform)
            .set_status(status)
            .await?;

        tracing::info!(
            "Bot status changed to {} by {}",
            status,
            ctx.invocation.principal.tag
        );

        Ok(format!(
            "Bot status set to: **{}** (Saved for restarts)",
            status.as_str().to_uppercase()
        ))
    }
}
