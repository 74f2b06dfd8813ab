use reqwest::Client;

/// The endpoint rejects requests much past this length, so longer replies
/// are synthesized chunk by chunk.
const MAX_CHUNK_CHARS: usize = 200;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Speech synthesis over the Google Translate TTS endpoint. Audio stays
/// in memory from synthesis to upload; nothing is written to disk.
pub struct TtsClient {
    client: Client,
}

impl TtsClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Synthesize `text` into MP3 bytes in the given language. Long text
    /// is split at whitespace into endpoint-sized chunks; the MP3 payloads
    /// concatenate cleanly.
    pub async fn synthesize(&self, text: &str, lang: &str) -> anyhow::Result<Vec<u8>> {
        let mut audio = Vec::new();

        for chunk in split_chunks(text, MAX_CHUNK_CHARS) {
            let resp = self
                .client
                .get(TTS_ENDPOINT)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", lang),
                    ("q", chunk.as_str()),
                ])
                .send()
                .await?;

            if !resp.status().is_success() {
                anyhow::bail!("TTS endpoint error ({})", resp.status());
            }

            audio.extend_from_slice(&resp.bytes().await?);
        }

        if audio.is_empty() {
            anyhow::bail!("TTS produced no audio");
        }

        Ok(audio)
    }
}

/// Split on whitespace into chunks of at most `max_chars` characters.
/// A single word longer than the limit becomes its own chunk.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + 1 + word.chars().count();
        if !current.is_empty() && needed > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = split_chunks("Olá, tudo bem?", 200);
        assert_eq!(chunks, vec!["Olá, tudo bem?".to_string()]);
    }

    #[test]
    fn long_text_splits_at_whitespace_within_limit() {
        let text = "uma palavra ".repeat(50);
        let chunks = split_chunks(&text, 40);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40);
            assert!(!chunk.starts_with(' ') && !chunk.ends_with(' '));
        }
        assert_eq!(chunks.join(" "), text.trim());
    }

    #[test]
    fn oversized_word_becomes_its_own_chunk() {
        let chunks = split_chunks("a bbbbbbbbbb c", 4);
        assert_eq!(
            chunks,
            vec!["a".to_string(), "bbbbbbbbbb".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_chunks("   ", 200).is_empty());
    }
}
