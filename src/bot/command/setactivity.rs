use serenity::async_trait;

use crate::bot::registry::{CommandContext, CommandHandler};
use crate::error::{dispatch::DispatchError, AppError};
use crate::model::{
    command::{CommandDefinition, OptionSpec},
    presence::{Activity, ActivityKind},
};
use crate::service::PresenceController;

/// `/setactivity type:<kind> name:<text> [url:<twitch url>]`
pub struct SetActivity;

#[async_trait]
impl CommandHandler for SetActivity {
    fn definition(&self) -> CommandDefinition {
        let kind = ActivityKind::ALL.iter().fold(
            OptionSpec::string(
                "type",
                "The type of activity (e.g., Playing, Watching, Listening, Competing)",
            )
            .required(true),
            |option, kind| option.choice(kind.label(), kind.as_str()),
        );

        CommandDefinition::new(
            "setactivity",
            "Sets the bot's custom activity (Rich Presence).",
        )
        .option(kind)
        .option(
            OptionSpec::string(
                "name",
                "The name of the activity (e.g., \"Valorant\", \"Music\", \"Netflix\")",
            )
            .required(true),
        )
        .option(OptionSpec::string(
            "url",
            "Streaming URL (only for Streaming type, e.g., Twitch URL)",
        ))
        .privileged()
        .ephemeral()
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, AppError> {
        let invocation = ctx.invocation;
        let kind = invocation
            .required_string("type")?
            .parse::<ActivityKind>()
            .map_err(|value| DispatchError::InvalidOption {
                option: "type".to_string(),
                value,
            })?;
        let name = invocation.required_string("name")?;
        let url = invocation.string("url").map(str::to_string);

        let presence = PresenceController::new(&ctx.state.store, ctx.platform)
            .set_activity(Activity::new(kind, name, url))
            .await?;

        tracing::info!(
            "Bot activity changed to {} {} by {}",
            kind,
            name,
            invocation.principal.tag
        );

        let mut reply = format!("Bot activity set to: **{} {}** (Saved for restarts)", kind, name);
        if let Some(url) = presence.activity.and_then(|activity| activity.url) {
            reply.push_str(&format!(" (URL: {})", url));
        }

        Ok(reply)
    }
}
