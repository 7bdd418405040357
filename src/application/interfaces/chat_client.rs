use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single user prompt to a chat-completion LLM and
/// receiving the assistant's text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Errors are split so callers can tell a refusing upstream
/// ([`DomainError::Upstream`]) from one that could not be reached or understood
/// ([`DomainError::Transport`]).
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
