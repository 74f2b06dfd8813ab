use crate::db::models::Exchange;

/// Persona and topic rules sent ahead of every prompt.
pub const SYSTEM_INSTRUCTIONS: &str = "\
Você é Ami, uma assistente virtual para idosos que responde APENAS dúvidas sobre o uso de celulares Samsung e redes sociais.

Regras:
- Sempre comece acolhendo o idoso.
- Primeiro pergunte o nome da pessoa, só depois pergunte no que pode ajudar.
- Se a fala do idoso parecer uma reclamação, responda de forma empática.
- Se for neutra ou elogio, use emojis amigáveis.
- Explique de forma simples e clara como usar o celular.
- Nunca fale de assuntos que não sejam celulares Samsung ou redes sociais.";

/// How many of the most recent exchanges are rendered into the prompt.
/// Older entries stay in the store, they just stop being quoted.
pub const HISTORY_WINDOW: usize = 6;

pub const EMPTY_HISTORY_PLACEHOLDER: &str = "Nenhum histórico.";

/// Render the instruction block, the recent-history window (oldest of the
/// window first) and the current question into the single prompt string
/// sent to the model. Pure: no I/O, deterministic for a given input pair.
pub fn compose(history: &[Exchange], new_input: &str) -> String {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut rendered = String::new();
    for exchange in &history[start..] {
        rendered.push_str(&format!(
            "Usuário: {}\nAmi: {}\n",
            exchange.usuario, exchange.assistente
        ));
    }

    let mut prompt = String::with_capacity(
        SYSTEM_INSTRUCTIONS.len() + rendered.len() + new_input.len() + 64,
    );
    prompt.push_str(SYSTEM_INSTRUCTIONS);
    prompt.push_str("\n\nHistórico recente:\n");
    if rendered.is_empty() {
        prompt.push_str(EMPTY_HISTORY_PLACEHOLDER);
    } else {
        prompt.push_str(&rendered);
    }
    prompt.push_str("\n\nPergunta atual:\n");
    prompt.push_str(new_input);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(id: i64, usuario: &str, assistente: &str) -> Exchange {
        Exchange {
            id,
            user_id: "42".to_string(),
            usuario: usuario.to_string(),
            assistente: assistente.to_string(),
        }
    }

    #[test]
    fn empty_history_renders_the_placeholder() {
        let prompt = compose(&[], "Oi");
        assert!(prompt.contains("Histórico recente:\nNenhum histórico.\n\n"));
        assert!(!prompt.contains("Usuário:"));
    }

    #[test]
    fn history_window_keeps_only_the_most_recent_six() {
        let history: Vec<Exchange> = (1..=8)
            .map(|i| exchange(i, &format!("pergunta {i}"), &format!("resposta {i}")))
            .collect();

        let prompt = compose(&history, "e agora?");

        assert!(!prompt.contains("pergunta 1"));
        assert!(!prompt.contains("pergunta 2"));
        for i in 3..=8 {
            assert!(prompt.contains(&format!("Usuário: pergunta {i}")));
        }
        // Oldest of the window comes first.
        let p3 = prompt.find("pergunta 3").unwrap();
        let p8 = prompt.find("pergunta 8").unwrap();
        assert!(p3 < p8);
    }

    #[test]
    fn sections_appear_in_fixed_order_with_verbatim_input() {
        let history = vec![exchange(1, "Oi", "Olá! Qual o seu nome?")];
        let input = "Como instalo o WhatsApp?  (no meu Samsung)";
        let prompt = compose(&history, input);

        let instructions = prompt.find("Você é Ami").unwrap();
        let hist = prompt.find("Histórico recente:").unwrap();
        let question = prompt.find("Pergunta atual:").unwrap();
        assert!(instructions < hist && hist < question);
        assert!(prompt.ends_with(input));
    }

    #[test]
    fn compose_is_deterministic() {
        let history = vec![
            exchange(1, "Oi", "Olá!"),
            exchange(2, "Meu celular travou", "Sinto muito! Vamos resolver."),
        ];
        assert_eq!(compose(&history, "E agora?"), compose(&history, "E agora?"));
    }
}
