mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let store = startup::load_config_store(&config).await?;
    let token = startup::resolve_token(&store).await?;
    let registry = startup::build_registry();

    let state = AppState::new(store, registry);
    let client = bot::start::init_bot(&token, state).await?;

    bot::start::start_bot(client).await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
