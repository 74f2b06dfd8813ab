use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
pub enum BotCommand {
    #[command(description = "Começar a conversar com a Ami")]
    Start,
    #[command(description = "Mostrar ajuda")]
    Ajuda,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cmd {
        // No history is read or written here; the greeting just invites
        // the user to give their name.
        BotCommand::Start => {
            bot.send_message(
                msg.chat.id,
                "👋 Olá! Eu sou Ami, sua assistente virtual.\nQual o seu nome?",
            )
            .await?;
        }

        BotCommand::Ajuda => {
            bot.send_message(msg.chat.id, BotCommand::descriptions().to_string())
                .await?;
        }
    }

    Ok(())
}
