use crate::bot::platform::{EmbedAuthor, EmbedPayload, MessageSink, OutboundMessage};
use crate::data::ConfigStore;
use crate::error::{notification::NotificationError, platform::PlatformError};
use crate::model::{
    document::{path, EmbedTemplate},
    event::MemberEvent,
};
use crate::util::{parse::parse_snowflake, template};

/// Colour of the welcome embed.
pub const JOIN_EMBED_COLOUR: u32 = 0x7823eb;

/// Prefix marking a join message sent after the embed could not be delivered.
pub const FALLBACK_PREFIX: &str = "[Fallback] ";

/// How a membership notification ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No log channel is configured for the event.
    Disabled,
    /// The primary message was delivered.
    Sent,
    /// The primary message failed and the fallback was delivered.
    SentFallback,
    /// Nothing could be delivered. The failure has been logged.
    Failed,
}

/// Posts join and leave notifications to the configured log channels.
///
/// Joins are announced with the welcome embed and fall back to a plain-text message
/// once. Leaves are a single plain-text attempt.
pub struct MembershipNotifier<'a, S: MessageSink + ?Sized> {
    store: &'a ConfigStore,
    sink: &'a S,
    bot_name: String,
}

impl<'a, S: MessageSink + ?Sized> MembershipNotifier<'a, S> {
    pub fn new(store: &'a ConfigStore, sink: &'a S, bot_name: impl Into<String>) -> Self {
        Self {
            store,
            sink,
            bot_name: bot_name.into(),
        }
    }

    /// Announces a member joining.
    ///
    /// # Arguments
    /// - `member` - The member who joined
    ///
    /// # Returns
    /// - `NotifyOutcome` - What was delivered; failures are logged, never returned
    pub async fn notify_join(&self, member: &MemberEvent) -> NotifyOutcome {
        let Some(channel_id) = self.channel(path::JOIN_LOG_CHANNEL).await else {
            tracing::warn!("Join log channel is not configured; skipping join notification");
            return NotifyOutcome::Disabled;
        };

        let primary = match self.join_embed(member).await {
            Ok(embed) => self
                .sink
                .send(channel_id, &OutboundMessage::Embed(embed))
                .await
                .map_err(|source| NotificationError::Send { channel_id, source }),
            Err(e) => Err(e),
        };

        let Err(e) = primary else {
            tracing::info!("Sent join notification for {}", member.tag);
            return NotifyOutcome::Sent;
        };
        log_failure("join embed", &e);

        let Some(fallback) = self.store.get_str(path::JOIN_FALLBACK).await else {
            tracing::error!(
                "{}",
                NotificationError::MissingTemplate(path::JOIN_FALLBACK.to_string())
            );
            return NotifyOutcome::Failed;
        };

        let content = format!(
            "{}{}",
            FALLBACK_PREFIX,
            template::render(
                &fallback,
                &[("user", member.mention.as_str()), ("server.name", member.guild_name.as_str())],
            )
        );

        match self.sink.send(channel_id, &OutboundMessage::Text(content)).await {
            Ok(()) => {
                tracing::info!("Sent fallback join notification for {}", member.tag);
                NotifyOutcome::SentFallback
            }
            Err(source) => {
                log_failure("fallback join message", &NotificationError::Send { channel_id, source });
                NotifyOutcome::Failed
            }
        }
    }

    /// Announces a member leaving. A single attempt, without fallback.
    pub async fn notify_leave(&self, member: &MemberEvent) -> NotifyOutcome {
        let Some(channel_id) = self.channel(path::LEAVE_LOG_CHANNEL).await else {
            tracing::warn!("Leave log channel is not configured; skipping leave notification");
            return NotifyOutcome::Disabled;
        };

        let Some(leave_template) = self.store.get_str(path::LEAVE_MESSAGE).await else {
            tracing::error!(
                "{}",
                NotificationError::MissingTemplate(path::LEAVE_MESSAGE.to_string())
            );
            return NotifyOutcome::Failed;
        };

        let content = template::render(
            &leave_template,
            &[("username", member.username.as_str()), ("server.name", member.guild_name.as_str())],
        );

        match self.sink.send(channel_id, &OutboundMessage::Text(content)).await {
            Ok(()) => {
                tracing::info!("Sent leave notification for {}", member.tag);
                NotifyOutcome::Sent
            }
            Err(source) => {
                log_failure("leave message", &NotificationError::Send { channel_id, source });
                NotifyOutcome::Failed
            }
        }
    }

    /// Renders the welcome embed from `events.guildMemberAdd.embed`.
    async fn join_embed(&self, member: &MemberEvent) -> Result<EmbedPayload, NotificationError> {
        let embed_template = match self.store.section::<EmbedTemplate>(path::JOIN_EMBED).await {
            Ok(Some(embed_template)) => embed_template,
            Ok(None) => return Err(NotificationError::MissingTemplate(path::JOIN_EMBED.to_string())),
            Err(e) => {
                tracing::warn!("Malformed join embed template: {}", e);
                return Err(NotificationError::MissingTemplate(path::JOIN_EMBED.to_string()));
            }
        };

        let eye_emoji = embed_template
            .eye_emoji_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("<:custom_eye:{}>", id))
            .unwrap_or_default();

        let values = [
            ("eye_emoji", eye_emoji.as_str()),
            ("bot_name", self.bot_name.as_str()),
            ("username", member.username.as_str()),
        ];

        let author = embed_template
            .author_icon_url
            .filter(|url| !url.is_empty())
            .map(|icon_url| EmbedAuthor {
                name: self.bot_name.clone(),
                icon_url,
            });

        Ok(EmbedPayload {
            title: template::render(&embed_template.title, &values),
            description: template::render(&embed_template.description, &values),
            colour: JOIN_EMBED_COLOUR,
            author,
        })
    }

    async fn channel(&self, section: &str) -> Option<u64> {
        match parse_snowflake(self.store.get(section).await.as_ref()) {
            Ok(channel_id) => channel_id,
            Err(e) => {
                tracing::error!("Invalid channel id at '{}': {}", section, e);
                None
            }
        }
    }
}

fn log_failure(what: &str, error: &NotificationError) {
    tracing::error!("Failed to send {}: {}", what, error);

    if let NotificationError::Send { source, .. } = error {
        if let Some(hint) = source.hint() {
            tracing::error!("Hint: {}", hint);
        }
        if let PlatformError::Discord(inner) = source {
            tracing::debug!("Discord error detail: {:?}", inner);
        }
    }
}
