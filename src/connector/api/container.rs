use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::{ChatClient, GetHoroscopeUseCase, HoroscopeCache};
use crate::connector::{InMemoryHoroscopeCache, MockChatClient, OpenRouterClient, OpenRouterConfig};
use crate::domain::DomainError;

pub struct ContainerConfig {
    /// Answer from [`MockChatClient`] instead of calling OpenRouter. No API key
    /// is needed in this mode.
    pub mock_llm: bool,
    /// Upper bound for every upstream LLM call.
    pub timeout: Duration,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock_llm: false,
            timeout: crate::connector::DEFAULT_TIMEOUT,
        }
    }
}

/// Wires the LLM client and the horoscope cache together.
///
/// One container lives for the whole process, so the cache it owns is shared
/// by every request the process serves.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    cache: Arc<dyn HoroscopeCache>,
    mock_llm: bool,
}

impl Container {
    /// Build the container from the environment.
    ///
    /// Fails with [`DomainError::Configuration`] when `OPENROUTER_API_KEY` is
    /// missing and the mock client was not requested.
    pub fn new(config: ContainerConfig) -> Result<Self, DomainError> {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock LLM client");
            Arc::new(MockChatClient::new())
        } else {
            let openrouter = OpenRouterConfig::from_env()?.with_timeout(config.timeout);
            let client = OpenRouterClient::new(openrouter)?;
            info!(
                "Using OpenRouter at {} with model {}",
                client.url(),
                client.model()
            );
            Arc::new(client)
        };

        Ok(Self {
            chat_client,
            cache: Arc::new(InMemoryHoroscopeCache::new()),
            mock_llm: config.mock_llm,
        })
    }

    /// Build a container around explicit collaborators.
    pub fn with_services(chat_client: Arc<dyn ChatClient>, cache: Arc<dyn HoroscopeCache>) -> Self {
        Self {
            chat_client,
            cache,
            mock_llm: false,
        }
    }

    pub fn horoscope_use_case(&self) -> GetHoroscopeUseCase {
        GetHoroscopeUseCase::new(self.chat_client.clone(), self.cache.clone())
    }

    pub fn mock_llm(&self) -> bool {
        self.mock_llm
    }
}
