pub mod commands;
pub mod handlers;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;

use crate::agent::responder::Responder;
use crate::ai::tts::TtsClient;
use crate::config::AppConfig;
use crate::db::Database;

/// Shared application state, accessible from all handlers.
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub responder: Responder,
    pub tts: TtsClient,
}

/// Build the teloxide update handler tree: one branch for commands, one
/// for any other text message.
pub fn build_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    let command_handler = Update::filter_message()
        .filter_command::<commands::BotCommand>()
        .endpoint(commands::handle_command);

    let message_handler = Update::filter_message().endpoint(handlers::handle_message);

    dptree::entry()
        .branch(command_handler)
        .branch(message_handler)
}
