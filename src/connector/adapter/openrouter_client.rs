use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai";
const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
pub const DEFAULT_REFERER: &str = "https://astrogenapp.vercel.app/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const BASE_URL_VAR: &str = "OPENROUTER_BASE_URL";
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
pub const REFERER_VAR: &str = "OPENROUTER_REFERER";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Settings for [`OpenRouterClient`].
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub timeout: Duration,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from the environment:
    ///
    /// | Variable              | Default                            |
    /// |-----------------------|------------------------------------|
    /// | `OPENROUTER_API_KEY`  | required                           |
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai`            |
    /// | `OPENROUTER_MODEL`    | `deepseek/deepseek-chat:free`      |
    /// | `OPENROUTER_REFERER`  | `https://astrogenapp.vercel.app/`  |
    pub fn from_env() -> Result<Self, DomainError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "{API_KEY_VAR} não configurada nas variáveis de ambiente"
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Ok(base) = std::env::var(BASE_URL_VAR) {
            config.base_url = base;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config.model = model;
        }
        if let Ok(referer) = std::env::var(REFERER_VAR) {
            config.referer = referer;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the OpenRouter chat completion API (and any endpoint that
/// speaks the same `choices[].message.content` dialect).
///
/// Every request is bounded by the configured timeout; hitting it is reported
/// as [`DomainError::Transport`]. Nothing is retried.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    referer: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("HTTP client setup failed: {e}")))?;

        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            COMPLETIONS_PATH
        );

        Ok(Self {
            client,
            api_key: config.api_key,
            model: config.model,
            referer: config.referer,
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending completion request to {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::transport(format!("OpenRouter request timed out: {e}"))
                } else {
                    DomainError::transport(format!("OpenRouter request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenRouter returned {status}: {body}");
            return Err(DomainError::upstream(status.as_u16(), body));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::transport(format!("OpenRouter: failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainError::transport("OpenRouter: response has no choices"))
    }
}
