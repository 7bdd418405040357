use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const MISSING_SIGN_MESSAGE: &str = "Signo não fornecido";

/// Inbound request body: `{ "sign": "...", "use_cache": true }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoroscopeRequest {
    #[serde(default)]
    sign: Option<String>,
    /// `null` reads as absent.
    #[serde(default)]
    use_cache: Option<bool>,
}

impl HoroscopeRequest {
    pub fn new(sign: impl Into<String>) -> Self {
        Self {
            sign: Some(sign.into()),
            use_cache: None,
        }
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = Some(use_cache);
        self
    }

    pub fn sign(&self) -> Option<&str> {
        self.sign.as_deref()
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache.unwrap_or(false)
    }

    /// The sign, exactly as sent, if it is not blank.
    ///
    /// Signs are cache keys and are not normalized beyond the blank check.
    pub fn validated_sign(&self) -> Result<&str, DomainError> {
        match self.sign.as_deref() {
            Some(sign) if !sign.trim().is_empty() => Ok(sign),
            _ => Err(DomainError::invalid_input(MISSING_SIGN_MESSAGE)),
        }
    }
}
