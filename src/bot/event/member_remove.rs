use serenity::async_trait;

use crate::bot::registry::{EventContext, EventDefinition, EventListener};
use crate::error::AppError;
use crate::model::event::{BotEvent, EventKind};
use crate::service::MembershipNotifier;

/// Posts the leave notification when a member leaves.
pub struct MemberRemove;

#[async_trait]
impl EventListener for MemberRemove {
    fn definition(&self) -> EventDefinition {
        EventDefinition::on(EventKind::GuildMemberRemove)
    }

    async fn execute(&self, ctx: EventContext<'_>, event: &BotEvent) -> Result<(), AppError> {
        let BotEvent::MemberLeft(member) = event else {
            return Ok(());
        };

        tracing::info!("{} left {}", member.tag, member.guild_name);

        MembershipNotifier::new(&ctx.state.store, ctx.platform, ctx.platform.bot_name())
            .notify_leave(member)
            .await;

        Ok(())
    }
}
