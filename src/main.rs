//! Fitbot - Telegram fitness bot
//!
//! Onboards users with a short questionnaire (age, gender, goal), stores
//! the profile in MongoDB and serves workout plans and workout logging.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - Profile store (MongoDB)
//! - `cache` - Moka-backed typed caches
//! - `onboarding` - Questionnaire state machine and sessions
//! - `workout` - Workout plans and log formatting
//! - `bot` - Dispatcher and runtime (with Throttle for API rate limiting)
//! - `plugins` - Command handlers
//! - `utils` - Inbound event / outbound reply types

mod bot;
mod cache;
mod config;
mod database;
mod onboarding;
mod plugins;
mod utils;
mod workout;

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bot::AppState;
use config::Config;
use database::{Database, MongoStore};
use onboarding::SessionStore;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fitbot=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting fitbot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    let store = MongoStore::new(&db).await?;
    info!("Database connected");

    let sessions = SessionStore::new(config.onboarding_idle);
    match config.onboarding_idle {
        Some(idle) => info!("Onboarding sessions expire after {}s idle", idle.as_secs()),
        None => info!("Onboarding sessions never expire"),
    }

    // Throttle respects Telegram's per-chat and global rate limits
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    let state = AppState::new(Arc::new(store), sessions);
    let dispatcher = bot::build_dispatcher(bot.clone(), state);

    bot::run(&config, bot, dispatcher).await
}
