use std::sync::Arc;

use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

mod agent;
mod ai;
mod bot;
mod config;
mod db;

use config::AppConfig;
use db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🤖 Starting Ami...");

    // Load config
    let config = AppConfig::from_env()?;
    tracing::info!("Config loaded. Model: {}", config.gemini_model);
    // PORT is a hosting-platform placeholder; nothing listens on it.
    tracing::info!("PORT placeholder: {}", config.port);

    // Initialize database
    let db = Database::connect(&config.database_url).await?;
    db.run_migrations().await?;
    tracing::info!("Database connected and migrations applied.");

    // Initialize AI modules
    let llm_client = ai::llm::GeminiClient::new(&config);
    let responder = agent::responder::Responder::new(llm_client);
    let tts_client = ai::tts::TtsClient::new();

    // Build shared application state
    let state = Arc::new(bot::AppState {
        config: config.clone(),
        db,
        responder,
        tts: tts_client,
    });

    // Create the Telegram bot
    let bot = Bot::new(&config.telegram_bot_token);

    // Build the dispatcher
    let handler = bot::build_handler();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
