use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::use_cases::prompts::rebel_summary_prompt;
use crate::application::ChatClient;
use crate::domain::{DomainError, HoroscopeRecord};

/// Label prefixes the model likes to put in front of its answer.
const SUMMARY_LABELS: [&str; 2] = ["Resumo:", "Resumindo:"];

/// Produces a sarcastic replacement for a horoscope's summary.
///
/// Never fails: when the LLM refuses or cannot be reached, a canned line
/// mentioning the record's lucky number is returned instead.
pub struct RebelSummaryGenerator {
    chat_client: Arc<dyn ChatClient>,
}

impl RebelSummaryGenerator {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn generate(&self, record: &HoroscopeRecord) -> String {
        let prompt = rebel_summary_prompt(record);

        match self.chat_client.complete(&prompt).await {
            Ok(reply) => {
                debug!("Rebel summary raw reply: {}", reply);
                let summary = strip_summary_labels(&reply);
                if summary.is_empty() {
                    warn!("Rebel summary reply was empty, using fallback");
                    refused_fallback(record.lucky_number())
                } else {
                    summary
                }
            }
            Err(e @ DomainError::Upstream { .. }) => {
                warn!("Rebel summary upstream refused: {}", e);
                refused_fallback(record.lucky_number())
            }
            Err(e) => {
                warn!("Rebel summary request failed: {}", e);
                unreachable_fallback(record.lucky_number())
            }
        }
    }
}

fn strip_summary_labels(reply: &str) -> String {
    SUMMARY_LABELS
        .iter()
        .fold(reply.to_string(), |text, label| text.replace(label, ""))
        .trim()
        .to_string()
}

fn refused_fallback(lucky_number: u32) -> String {
    format!(
        "Número da sorte é só {lucky_number}? Caralho, que previsão de merda! Os astros devem estar de ressaca hoje."
    )
}

fn unreachable_fallback(lucky_number: u32) -> String {
    format!("Puta que pariu! As estrelas estão ocupadas, mas seu número continua sendo {lucky_number}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;

    fn record() -> HoroscopeRecord {
        HoroscopeRecord::new("Dia sério.", 77, "Azul", "Pense antes.", "Original.", "19/10/2026")
    }

    #[tokio::test]
    async fn strips_summary_labels_from_reply() {
        let client = Arc::new(MockChatClient::with_replies(vec![Ok(
            "Resumo: Que porra de número 77 é esse?  ".to_string()
        )]));
        let generator = RebelSummaryGenerator::new(client.clone());

        let summary = generator.generate(&record()).await;

        assert_eq!(summary, "Que porra de número 77 é esse?");
        assert_eq!(client.calls().len(), 1);
        assert!(client.calls()[0].contains("Número da Sorte: 77"));
    }

    #[tokio::test]
    async fn upstream_refusal_uses_status_fallback() {
        let client = Arc::new(MockChatClient::with_replies(vec![Err(DomainError::upstream(
            503, "busy",
        ))]));
        let generator = RebelSummaryGenerator::new(client);

        let summary = generator.generate(&record()).await;

        assert_eq!(summary, refused_fallback(77));
        assert!(summary.contains("77"));
    }

    #[tokio::test]
    async fn transport_failure_uses_other_fallback() {
        let client = Arc::new(MockChatClient::with_replies(vec![Err(DomainError::transport(
            "timed out",
        ))]));
        let generator = RebelSummaryGenerator::new(client);

        let summary = generator.generate(&record()).await;

        assert_eq!(summary, unreachable_fallback(77));
        assert_ne!(summary, refused_fallback(77));
    }

    #[tokio::test]
    async fn label_only_reply_falls_back() {
        let client = Arc::new(MockChatClient::with_replies(vec![Ok("Resumindo:  ".to_string())]));
        let generator = RebelSummaryGenerator::new(client);

        assert_eq!(generator.generate(&record()).await, refused_fallback(77));
    }

    #[tokio::test]
    async fn does_not_touch_the_record() {
        let client = Arc::new(MockChatClient::with_replies(vec![Ok("Vai se ferrar, 77.".to_string())]));
        let generator = RebelSummaryGenerator::new(client);
        let original = record();
        let copy = original.clone();

        let _ = generator.generate(&original).await;

        assert_eq!(original, copy);
    }
}
