//! Command handler and event listener registry.
//!
//! Handlers are registered once at startup. Each definition is validated before it is
//! indexed; malformed definitions and duplicate command names are skipped with a
//! warning instead of aborting startup. For duplicates the first registration wins.
//!
//! Event listeners are kept per `EventKind` in registration order. A listener declared
//! `once` is claimed by the first lookup of its kind and never returned again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serenity::async_trait;

use crate::bot::platform::Platform;
use crate::error::{
    dispatch::{DefinitionError, DispatchError},
    AppError,
};
use crate::model::{
    command::{CommandDefinition, CommandInvocation},
    event::{BotEvent, EventKind},
};
use crate::state::AppState;

/// Everything a command handler gets to work with.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub state: &'a AppState,
    pub platform: &'a dyn Platform,
    pub invocation: &'a CommandInvocation,
}

/// Everything an event listener gets to work with.
#[derive(Clone, Copy)]
pub struct EventContext<'a> {
    pub state: &'a AppState,
    pub platform: &'a dyn Platform,
}

/// A slash command implementation.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Parameter schema and dispatch flags of the command.
    fn definition(&self) -> CommandDefinition;

    /// Runs the command.
    ///
    /// # Returns
    /// - `Ok(String)` - Reply shown to the invoking user
    /// - `Err(AppError)` - Failure; the dispatcher decides what the user sees
    async fn execute(&self, ctx: CommandContext<'_>) -> Result<String, AppError>;
}

/// Declared subscription of an event listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition {
    /// Event name, e.g. `"guildMemberAdd"`.
    pub name: String,
    /// Whether the listener runs for the first occurrence only.
    pub once: bool,
}

impl EventDefinition {
    pub fn on(kind: EventKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            once: false,
        }
    }

    pub fn once(kind: EventKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            once: true,
        }
    }
}

/// A gateway event listener.
#[async_trait]
pub trait EventListener: Send + Sync {
    fn definition(&self) -> EventDefinition;

    async fn execute(&self, ctx: EventContext<'_>, event: &BotEvent) -> Result<(), AppError>;
}

struct RegisteredListener {
    listener: Arc<dyn EventListener>,
    once: bool,
    claimed: AtomicBool,
}

/// Index of registered commands and listeners.
#[derive(Default)]
pub struct HandlerRegistry {
    commands: Vec<(CommandDefinition, Arc<dyn CommandHandler>)>,
    command_index: HashMap<String, usize>,
    listeners: HashMap<EventKind, Vec<RegisteredListener>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers command handlers, skipping invalid or duplicate definitions.
    ///
    /// # Arguments
    /// - `handlers` - Handlers in registration order
    ///
    /// # Returns
    /// - `usize` - Number of handlers actually registered
    pub fn register_commands(
        &mut self,
        handlers: impl IntoIterator<Item = Arc<dyn CommandHandler>>,
    ) -> usize {
        let mut registered = 0;

        for handler in handlers {
            let definition = handler.definition();
            match self.try_register_command(definition, handler) {
                Ok(name) => {
                    tracing::info!("Registered command /{}", name);
                    registered += 1;
                }
                Err(e) => tracing::warn!("Skipping command definition: {}", e),
            }
        }

        registered
    }

    fn try_register_command(
        &mut self,
        definition: CommandDefinition,
        handler: Arc<dyn CommandHandler>,
    ) -> Result<String, DefinitionError> {
        definition.validate()?;

        if self.command_index.contains_key(&definition.name) {
            return Err(DefinitionError::Duplicate(definition.name));
        }

        let name = definition.name.clone();
        self.command_index.insert(name.clone(), self.commands.len());
        self.commands.push((definition, handler));

        Ok(name)
    }

    /// Registers event listeners, skipping those subscribed to unknown events.
    ///
    /// # Returns
    /// - `usize` - Number of listeners actually registered
    pub fn register_events(
        &mut self,
        listeners: impl IntoIterator<Item = Arc<dyn EventListener>>,
    ) -> usize {
        let mut registered = 0;

        for listener in listeners {
            let definition = listener.definition();
            let kind = match definition.name.parse::<EventKind>() {
                Ok(kind) => kind,
                Err(name) => {
                    tracing::warn!(
                        "Skipping event listener: {}",
                        DefinitionError::UnknownEvent(name)
                    );
                    continue;
                }
            };

            self.listeners
                .entry(kind)
                .or_default()
                .push(RegisteredListener {
                    listener,
                    once: definition.once,
                    claimed: AtomicBool::new(false),
                });

            tracing::info!(
                "Registered {} listener for '{}'",
                if definition.once { "once" } else { "on" },
                kind
            );
            registered += 1;
        }

        registered
    }

    /// Definition of a registered command.
    pub fn definition(&self, name: &str) -> Option<&CommandDefinition> {
        self.command_index
            .get(name)
            .map(|&index| &self.commands[index].0)
    }

    /// All registered command definitions in registration order.
    pub fn command_definitions(&self) -> Vec<CommandDefinition> {
        self.commands
            .iter()
            .map(|(definition, _)| definition.clone())
            .collect()
    }

    /// Runs the handler registered under `name`.
    ///
    /// # Returns
    /// - `Ok(String)` - The handler's reply
    /// - `Err(DispatchError::UnknownCommand)` - No handler by that name; nothing was sent
    /// - `Err(AppError)` - Any error returned by the handler
    pub async fn dispatch_command(
        &self,
        name: &str,
        ctx: CommandContext<'_>,
    ) -> Result<String, AppError> {
        let Some(&index) = self.command_index.get(name) else {
            return Err(DispatchError::UnknownCommand(name.to_string()).into());
        };

        let handler = self.commands[index].1.clone();
        handler.execute(ctx).await
    }

    /// Listeners for an event kind in registration order.
    ///
    /// `once` listeners are claimed here; they appear in exactly one lookup.
    pub fn lookup_event(&self, kind: EventKind) -> Vec<Arc<dyn EventListener>> {
        let Some(listeners) = self.listeners.get(&kind) else {
            return Vec::new();
        };

        listeners
            .iter()
            .filter(|entry| !entry.once || !entry.claimed.swap(true, Ordering::SeqCst))
            .map(|entry| entry.listener.clone())
            .collect()
    }

    /// Runs every listener for the event. Listener failures are logged, not returned.
    pub async fn dispatch_event(&self, ctx: EventContext<'_>, event: &BotEvent) {
        let kind = event.kind();

        for listener in self.lookup_event(kind) {
            if let Err(e) = listener.execute(ctx, event).await {
                tracing::error!("Error executing '{}' listener: {}", kind, e);
            }
        }
    }
}
