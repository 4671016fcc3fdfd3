mod bot;
mod config;
mod data;
mod error;
mod gateway;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    gateway::{discord::DiscordGateway, Gateway},
    scheduler::{
        drops::{start_scheduler, DropScheduler},
        window::SystemClock,
    },
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let gateway: Arc<dyn Gateway> = Arc::new(DiscordGateway::new(http));

    let drop_scheduler = Arc::new(DropScheduler::new(
        SystemClock::new(config.drop.utc_offset),
        config.drop.window,
        config.drop.wait,
    ));

    let state = Arc::new(BotState::new(db, gateway, config));
    let client = bot::start::init_bot(state.clone()).await?;

    // Held until shutdown so the drop job keeps running
    let _scheduler = start_scheduler(state, drop_scheduler).await?;

    bot::start::start_bot(client).await
}
