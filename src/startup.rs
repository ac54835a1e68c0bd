use tracing_subscriber::EnvFilter;

use crate::bot::{command, event, registry::HandlerRegistry};
use crate::config::Config;
use crate::data::ConfigStore;
use crate::error::{config::ConfigError, AppError};
use crate::model::document::path;

/// Initializes the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the configuration document with the environment overrides layered on top.
///
/// # Arguments
/// - `config` - Process configuration holding the document path and overrides
///
/// # Returns
/// - `Ok(ConfigStore)` - Store ready for use
/// - `Err(AppError::ConfigErr)` - Document missing, unreadable or malformed
pub async fn load_config_store(config: &Config) -> Result<ConfigStore, AppError> {
    let store = ConfigStore::load(&config.config_path, config.overrides.to_overlay()).await?;

    tracing::info!("Loaded configuration from {}", store.path().display());

    Ok(store)
}

/// Reads the bot token from the environment override or the document.
///
/// # Returns
/// - `Ok(String)` - The token
/// - `Err(AppError::ConfigErr(MissingValue))` - No token configured anywhere
pub async fn resolve_token(store: &ConfigStore) -> Result<String, AppError> {
    let token = store
        .get_str(path::BOT_TOKEN)
        .await
        .ok_or_else(|| ConfigError::MissingValue(format!("{} (or DISCORD_TOKEN)", path::BOT_TOKEN)))?;

    Ok(token)
}

/// Creates the registry with every built-in command and event listener.
pub fn build_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();

    let commands = registry.register_commands(command::definitions());
    let listeners = registry.register_events(event::listeners());

    tracing::info!(
        "Registered {} command(s) and {} event listener(s)",
        commands,
        listeners
    );

    registry
}
