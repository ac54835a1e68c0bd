use serenity::async_trait;

use crate::bot::registry::{EventContext, EventDefinition, EventListener};
use crate::error::AppError;
use crate::model::event::{BotEvent, EventKind};
use crate::service::MembershipNotifier;

/// Posts the welcome notification when a member joins.
pub struct MemberAdd;

#[async_trait]
impl EventListener for MemberAdd {
    fn definition(&self) -> EventDefinition {
        EventDefinition::on(EventKind::GuildMemberAdd)
    }

    async fn execute(&self, ctx: EventContext<'_>, event: &BotEvent) -> Result<(), AppError> {
        let BotEvent::MemberJoined(member) = event else {
            return Ok(());
        };

        tracing::info!("{} joined {}", member.tag, member.guild_name);

        MembershipNotifier::new(&ctx.state.store, ctx.platform, ctx.platform.bot_name())
            .notify_join(member)
            .await;

        Ok(())
    }
}
