//! Single-use interaction response tokens.
//!
//! Discord accepts exactly one initial response per interaction: either a reply or a
//! deferral that is later edited. The tokens in this module are consumed by value so a
//! second initial response cannot be written:
//!
//! ```text
//! PendingResponse --reply--> Completed
//! PendingResponse --defer--> DeferredResponse --finish--> Completed
//! ```
//!
//! `Completed::follow_up` sends additional messages afterwards. A deferral already
//! counts as the initial response, so when `finish` cannot edit the deferred message
//! the completed token is still handed back and a follow-up can carry the content.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::async_trait;

use crate::error::platform::PlatformError;

/// Raw interaction response operations of the platform.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    async fn reply(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError>;
    async fn defer(&self, ephemeral: bool) -> Result<(), PlatformError>;
    async fn edit(&self, content: &str) -> Result<(), PlatformError>;
    async fn follow_up(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError>;
}

/// An interaction that has not been answered yet.
pub struct PendingResponse {
    responder: Box<dyn InteractionResponder>,
}

/// Returned when deferring fails; the interaction is still unanswered.
pub struct DeferFailure {
    pub pending: PendingResponse,
    pub error: PlatformError,
}

/// Returned when the deferred message could not be edited.
pub struct FinishFailure {
    pub completed: Completed,
    pub error: PlatformError,
}

/// An acknowledged interaction whose message is still to be written.
pub struct DeferredResponse {
    responder: Box<dyn InteractionResponder>,
}

/// An interaction whose initial response has been sent.
pub struct Completed {
    responder: Box<dyn InteractionResponder>,
}

impl PendingResponse {
    pub fn new(responder: impl InteractionResponder + 'static) -> Self {
        Self {
            responder: Box::new(responder),
        }
    }

    /// Answers the interaction with a message.
    pub async fn reply(self, content: &str, ephemeral: bool) -> Result<Completed, PlatformError> {
        self.responder.reply(content, ephemeral).await?;
        Ok(Completed {
            responder: self.responder,
        })
    }

    /// Acknowledges the interaction without content.
    ///
    /// # Returns
    /// - `Ok(DeferredResponse)` - The interaction shows a loading state until finished
    /// - `Err(DeferFailure)` - Deferral failed; the pending token is handed back
    pub async fn defer(self, ephemeral: bool) -> Result<DeferredResponse, DeferFailure> {
        match self.responder.defer(ephemeral).await {
            Ok(()) => Ok(DeferredResponse {
                responder: self.responder,
            }),
            Err(error) => Err(DeferFailure {
                pending: self,
                error,
            }),
        }
    }
}

impl DeferredResponse {
    /// Writes the final content of the deferred message.
    ///
    /// # Returns
    /// - `Ok(Completed)` - The deferred message now shows `content`
    /// - `Err(FinishFailure)` - The edit failed; the completed token is handed back
    pub async fn finish(self, content: &str) -> Result<Completed, FinishFailure> {
        let result = self.responder.edit(content).await;
        let completed = Completed {
            responder: self.responder,
        };

        match result {
            Ok(()) => Ok(completed),
            Err(error) => Err(FinishFailure { completed, error }),
        }
    }
}

impl Completed {
    pub async fn follow_up(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError> {
        self.responder.follow_up(content, ephemeral).await
    }
}

/// Serenity-backed responder for one command interaction.
pub struct SerenityResponder {
    ctx: Context,
    interaction: CommandInteraction,
}

impl SerenityResponder {
    pub fn new(ctx: Context, interaction: CommandInteraction) -> Self {
        Self { ctx, interaction }
    }
}

#[async_trait]
impl InteractionResponder for SerenityResponder {
    async fn reply(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError> {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral);

        self.interaction
            .create_response(&self.ctx, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), PlatformError> {
        let message = CreateInteractionResponseMessage::new().ephemeral(ephemeral);

        self.interaction
            .create_response(&self.ctx, CreateInteractionResponse::Defer(message))
            .await?;

        Ok(())
    }

    async fn edit(&self, content: &str) -> Result<(), PlatformError> {
        self.interaction
            .edit_response(&self.ctx, EditInteractionResponse::new().content(content))
            .await?;

        Ok(())
    }

    async fn follow_up(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError> {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(ephemeral);

        self.interaction
            .create_followup(&self.ctx, followup)
            .await?;

        Ok(())
    }
}
