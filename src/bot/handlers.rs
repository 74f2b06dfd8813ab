use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::bot::AppState;

/// One full conversational turn for a non-command text message. Steps run
/// strictly in order; an exchange is persisted before its reply becomes
/// visible, and a voice failure never retracts the delivered text.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        // Unsupported message type
        return Ok(());
    };
    let user_id = msg.chat.id.0.to_string();

    // ── 1. Load history ────────────────────────────────────────────
    // A failed read degrades to an empty history; it never blocks the
    // reply.
    let history = match state.db.load_history(&user_id).await {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("History read failed for user {}: {e:#}", user_id);
            Vec::new()
        }
    };

    // ── 2. Interim notice, edited in place once the reply exists ───
    let pending = bot
        .send_message(msg.chat.id, "💭 Ami está pensando...")
        .await?;

    // ── 3. Generate ────────────────────────────────────────────────
    let reply = state.responder.reply(&history, text).await;

    // ── 4. Persist before delivery ─────────────────────────────────
    if let Err(e) = state.db.append_exchange(&user_id, text, &reply).await {
        tracing::error!("History write failed for user {}: {e:#}", user_id);
        bot.send_message(
            msg.chat.id,
            "⚠️ Não consegui salvar esta conversa no histórico.",
        )
        .await?;
    }

    // ── 5. Deliver text ────────────────────────────────────────────
    bot.edit_message_text(msg.chat.id, pending.id, reply.clone())
        .await?;

    // ── 6. Deliver voice ───────────────────────────────────────────
    match state.tts.synthesize(&reply, &state.config.tts_lang).await {
        Ok(audio) => {
            let voice = InputFile::memory(audio).file_name("resposta.mp3");
            if let Err(e) = bot.send_voice(msg.chat.id, voice).await {
                tracing::error!("Voice send failed for user {}: {e}", user_id);
                bot.send_message(msg.chat.id, format!("(Erro ao gerar áudio: {e})"))
                    .await?;
            }
        }
        Err(e) => {
            tracing::error!("TTS failed for user {}: {e:#}", user_id);
            bot.send_message(msg.chat.id, format!("(Erro ao gerar áudio: {e})"))
                .await?;
        }
    }

    Ok(())
}
