use serenity::all::{
    ActivityData, ChannelId, ChannelType, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateEmbedAuthor, CreateMessage, GuildId, OnlineStatus,
};
use serenity::async_trait;
use serenity::http::HttpError;

use super::{CommandDeployer, MessageSink, OutboundMessage, Platform, PresenceSession};
use crate::error::platform::PlatformError;
use crate::model::{
    command::{CommandDefinition, OptionKind},
    presence::{Activity, ActivityKind, BotStatus, Presence},
};

/// Discord JSON error code for "Missing Access".
const MISSING_ACCESS: isize = 50001;
/// Discord JSON error code for "Unknown Channel".
const UNKNOWN_CHANNEL: isize = 10003;

/// Serenity-backed platform bound to the context of one gateway event.
///
/// `Context` is cheap to clone (it only holds `Arc`s), so a `DiscordPlatform` is built
/// per event and dropped once the event has been handled.
pub struct DiscordPlatform {
    ctx: Context,
}

impl DiscordPlatform {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Converts a Serenity error into a platform error for a channel operation,
    /// recognising the Discord error codes operators can act on.
    fn classify(err: serenity::Error, channel_id: u64) -> PlatformError {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
            match response.error.code {
                MISSING_ACCESS => return PlatformError::MissingAccess(channel_id),
                UNKNOWN_CHANNEL => return PlatformError::UnknownChannel(channel_id),
                _ => {}
            }
        }
        PlatformError::from(err)
    }
}

#[async_trait]
impl PresenceSession for DiscordPlatform {
    async fn set_presence(&self, presence: &Presence) -> Result<(), PlatformError> {
        let activity = presence.activity.as_ref().map(activity_data).transpose()?;

        self.ctx.set_presence(activity, online_status(presence.status));

        Ok(())
    }
}

#[async_trait]
impl MessageSink for DiscordPlatform {
    async fn send(&self, channel_id: u64, message: &OutboundMessage) -> Result<(), PlatformError> {
        let channel = ChannelId::new(channel_id)
            .to_channel(&self.ctx)
            .await
            .map_err(|e| Self::classify(e, channel_id))?;

        let Some(channel) = channel.guild() else {
            return Err(PlatformError::NotTextChannel(channel_id));
        };
        if !is_text_based(channel.kind) {
            return Err(PlatformError::NotTextChannel(channel_id));
        }

        let builder = match message {
            OutboundMessage::Text(content) => CreateMessage::new().content(content),
            OutboundMessage::Embed(payload) => {
                let mut embed = CreateEmbed::new()
                    .title(&payload.title)
                    .description(&payload.description)
                    .colour(payload.colour);
                if let Some(author) = &payload.author {
                    embed = embed
                        .author(CreateEmbedAuthor::new(&author.name).icon_url(&author.icon_url));
                }
                CreateMessage::new().embed(embed)
            }
        };

        channel
            .send_message(&self.ctx.http, builder)
            .await
            .map_err(|e| Self::classify(e, channel_id))?;

        Ok(())
    }
}

#[async_trait]
impl CommandDeployer for DiscordPlatform {
    async fn deploy_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDefinition],
    ) -> Result<usize, PlatformError> {
        let builders = commands.iter().map(create_command).collect();

        let deployed = GuildId::new(guild_id)
            .set_commands(&self.ctx.http, builders)
            .await?;

        Ok(deployed.len())
    }
}

impl Platform for DiscordPlatform {
    fn bot_name(&self) -> String {
        self.ctx.cache.current_user().name.clone()
    }
}

/// Converts a validated activity into Serenity's presence activity.
///
/// # Returns
/// - `Ok(ActivityData)` - Activity ready to send over the gateway
/// - `Err(PlatformError::InvalidActivityUrl)` - Streaming activity without a parseable URL
pub fn activity_data(activity: &Activity) -> Result<ActivityData, PlatformError> {
    let name = activity.name.clone();

    let data = match activity.kind {
        ActivityKind::Playing => ActivityData::playing(name),
        ActivityKind::Watching => ActivityData::watching(name),
        ActivityKind::Listening => ActivityData::listening(name),
        ActivityKind::Competing => ActivityData::competing(name),
        ActivityKind::Streaming => {
            let Some(url) = activity.url.as_deref() else {
                return Err(PlatformError::InvalidActivityUrl(None));
            };
            ActivityData::streaming(name, url)
                .map_err(|_| PlatformError::InvalidActivityUrl(Some(url.to_string())))?
        }
    };

    Ok(data)
}

pub fn online_status(status: BotStatus) -> OnlineStatus {
    match status {
        BotStatus::Online => OnlineStatus::Online,
        BotStatus::Idle => OnlineStatus::Idle,
        BotStatus::Dnd => OnlineStatus::DoNotDisturb,
        BotStatus::Invisible => OnlineStatus::Invisible,
    }
}

/// Builds the application command payload for a definition.
pub fn create_command(definition: &CommandDefinition) -> CreateCommand {
    definition.options.iter().fold(
        CreateCommand::new(&definition.name).description(&definition.description),
        |command, option| {
            let kind = match option.kind {
                OptionKind::String => CommandOptionType::String,
                OptionKind::Integer => CommandOptionType::Integer,
                OptionKind::Boolean => CommandOptionType::Boolean,
            };
            let builder = option.choices.iter().fold(
                CreateCommandOption::new(kind, &option.name, &option.description)
                    .required(option.required),
                |builder, choice| builder.add_string_choice(&choice.name, &choice.value),
            );
            command.add_option(builder)
        },
    )
}

fn is_text_based(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::Voice
            | ChannelType::Stage
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::NewsThread
    )
}
