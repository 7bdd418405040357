use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Reply used once the scripted replies run out.
pub const MOCK_HOROSCOPE_REPLY: &str = "Descrição: A Lua em trígono com Saturno favorece decisões ponderadas hoje.
Número da Sorte: 27
Cor: Roxo Místico
Conselho: Reserve um momento para revisar seus planos antes de agir.
Resumindo: Um dia para pensar duas vezes.";

/// Most recent prompts kept by [`MockChatClient::calls`].
pub const CALL_HISTORY_LIMIT: usize = 64;

/// A [`ChatClient`] that answers from a script instead of the network.
///
/// Replies are handed out in order; once exhausted, every call returns
/// [`MOCK_HOROSCOPE_REPLY`]. The last [`CALL_HISTORY_LIMIT`] prompts are
/// recorded.
pub struct MockChatClient {
    replies: Mutex<VecDeque<Result<String, DomainError>>>,
    calls: Mutex<VecDeque<String>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    pub fn with_replies(replies: Vec<Result<String, DomainError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(VecDeque::new()),
        }
    }

    /// Most recent prompts received, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        {
            let mut calls = self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if calls.len() == CALL_HISTORY_LIMIT {
                calls.pop_front();
            }
            calls.push_back(prompt.to_string());
        }

        let scripted = self
            .replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        debug!("MockChatClient answering prompt of {} chars", prompt.len());
        scripted.unwrap_or_else(|| Ok(MOCK_HOROSCOPE_REPLY.to_string()))
    }
}
