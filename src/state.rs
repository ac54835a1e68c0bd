//! Application state shared across all gateway event handlers.
//!
//! `AppState` is built once during startup and cloned into the Serenity event handler.
//! Every field is reference counted, so clones share the same configuration store and
//! handler registry.

use std::sync::Arc;

use crate::bot::registry::HandlerRegistry;
use crate::data::ConfigStore;

/// Shared resources used while handling commands and events.
#[derive(Clone)]
pub struct AppState {
    /// Durable configuration document.
    ///
    /// The only authoritative copy of runtime configuration. Handlers read from it
    /// immediately before acting and write presence changes back through it.
    pub store: Arc<ConfigStore>,

    /// Registered command handlers and event listeners.
    ///
    /// Populated during startup and read-only afterwards.
    pub registry: Arc<HandlerRegistry>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `store` - Loaded configuration store
    /// - `registry` - Registry with all handlers registered
    ///
    /// # Returns
    /// - `AppState` - State ready to be handed to the event handler
    pub fn new(store: ConfigStore, registry: HandlerRegistry) -> Self {
        Self {
            store: Arc::new(store),
            registry: Arc::new(registry),
        }
    }
}
