use crate::ai::llm::GeminiClient;
use crate::db::models::Exchange;

use super::prompt;

/// Prefix of the reply substituted when the model call fails.
pub const FALLBACK_PREFIX: &str = "Desculpe, ocorreu um erro ao responder:";

/// Turns (history, question) into the assistant's reply. Any model-side
/// failure is absorbed into a textual fallback, which is a valid reply in
/// its own right: it gets persisted and delivered like any other.
pub struct Responder {
    llm: GeminiClient,
}

impl Responder {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }

    /// One attempt per turn, no retry.
    pub async fn reply(&self, history: &[Exchange], new_input: &str) -> String {
        let composed = prompt::compose(history, new_input);
        match self.llm.generate(&composed).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Gemini generation failed: {e:#}");
                fallback_reply(&e)
            }
        }
    }
}

fn fallback_reply(err: &anyhow::Error) -> String {
    format!("{FALLBACK_PREFIX} {err}")
}
