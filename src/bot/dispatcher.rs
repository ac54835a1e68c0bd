//! Slash command dispatch.
//!
//! Drives one command invocation through
//! `Received -> (Unauthorized | Deferred) -> (Replied | Errored)`.
//! Every invocation ends with exactly one initial response on its token; handler
//! errors and panics are turned into a user-facing message and logged in full.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;

use crate::bot::platform::Platform;
use crate::bot::registry::CommandContext;
use crate::bot::response::PendingResponse;
use crate::error::{internal::InternalError, GENERIC_COMMAND_ERROR};
use crate::model::command::CommandInvocation;
use crate::service::PermissionGate;
use crate::state::AppState;

/// Reply to callers lacking an allow-listed role.
pub const UNAUTHORIZED_MESSAGE: &str = "You do not have permission to use this command.";

/// Reply to invocations of commands the bot does not know.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "This command is not available.";

/// Terminal state of a dispatched invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler succeeded and its reply was delivered.
    Replied,
    /// The caller is not allowed to run the command.
    Unauthorized,
    /// No handler is registered under the invoked name.
    UnknownCommand,
    /// The handler failed or panicked, or the response could not be delivered.
    Errored,
}

pub struct CommandDispatcher<'a> {
    state: &'a AppState,
    platform: &'a dyn Platform,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(state: &'a AppState, platform: &'a dyn Platform) -> Self {
        Self { state, platform }
    }

    /// Handles one command invocation.
    ///
    /// # Arguments
    /// - `invocation` - Invoked command, options and caller
    /// - `response` - Unanswered response token for the interaction
    ///
    /// # Returns
    /// - `DispatchOutcome` - Terminal state reached; all failures are logged
    pub async fn handle(
        &self,
        invocation: CommandInvocation,
        response: PendingResponse,
    ) -> DispatchOutcome {
        let registry = &self.state.registry;

        let Some(definition) = registry.definition(&invocation.name) else {
            tracing::warn!(
                "No command matching /{} was found (invoked by {})",
                invocation.name,
                invocation.principal.tag
            );
            if let Err(e) = response.reply(UNKNOWN_COMMAND_MESSAGE, true).await {
                tracing::error!("Failed to reply to unknown command: {}", e);
            }
            return DispatchOutcome::UnknownCommand;
        };
        let ephemeral = definition.ephemeral;

        if definition.privileged
            && !PermissionGate::new(&self.state.store)
                .authorize(&invocation.principal)
                .await
        {
            tracing::info!(
                "Denied /{} for {}: no allowed role",
                invocation.name,
                invocation.principal.tag
            );
            if let Err(e) = response.reply(UNAUTHORIZED_MESSAGE, true).await {
                tracing::error!("Failed to send permission denial: {}", e);
            }
            return DispatchOutcome::Unauthorized;
        }

        let deferred = match response.defer(ephemeral).await {
            Ok(deferred) => deferred,
            Err(failure) => {
                tracing::error!(
                    "Failed to defer reply for /{}: {}",
                    invocation.name,
                    failure.error
                );
                if let Err(e) = failure.pending.reply(GENERIC_COMMAND_ERROR, false).await {
                    tracing::error!("Failed to send error reply: {}", e);
                }
                return DispatchOutcome::Errored;
            }
        };

        let ctx = CommandContext {
            state: self.state,
            platform: self.platform,
            invocation: &invocation,
        };

        let result = AssertUnwindSafe(registry.dispatch_command(&invocation.name, ctx))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(InternalError::HandlerPanicked(invocation.name.clone()).into()));

        let (content, outcome) = match result {
            Ok(reply) => (reply, DispatchOutcome::Replied),
            Err(e) => {
                tracing::error!("Error executing /{}: {}", invocation.name, e);
                let content = e
                    .user_message()
                    .unwrap_or_else(|| GENERIC_COMMAND_ERROR.to_string());
                (content, DispatchOutcome::Errored)
            }
        };

        if let Err(failure) = deferred.finish(&content).await {
            tracing::warn!(
                "Failed to edit deferred reply for /{}, sending a follow-up: {}",
                invocation.name,
                failure.error
            );
            if let Err(e) = failure.completed.follow_up(&content, ephemeral).await {
                tracing::error!("Failed to deliver reply for /{}: {}", invocation.name, e);
                return DispatchOutcome::Errored;
            }
        }

        outcome
    }
}
