use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::{DomainError, HoroscopeRequest};

use super::super::Container;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Erro ao consultar a API OpenRouter";
pub const PROCESSING_ERROR_MESSAGE: &str = "Erro ao processar sua solicitação";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Status plus optional JSON body, independent of the transport serving it.
#[derive(Debug, Clone, PartialEq)]
pub struct HoroscopeResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl HoroscopeResponse {
    fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    fn json(status: StatusCode, body: impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: Some(value),
            },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                DomainError::internal(format!("Failed to serialize response: {e}")).into()
            }
        }
    }

    fn error(status: StatusCode, error: &str, details: Option<String>) -> Self {
        let body = ErrorBody { error, details };
        Self {
            status,
            body: serde_json::to_value(body).ok(),
        }
    }

    pub fn body_text(&self) -> String {
        self.body.as_ref().map(Value::to_string).unwrap_or_default()
    }
}

impl From<DomainError> for HoroscopeResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(message) => {
                Self::error(StatusCode::BAD_REQUEST, &message, None)
            }
            e @ DomainError::Upstream { .. } => Self::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_ERROR_MESSAGE,
                Some(e.to_string()),
            ),
            e => Self::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                PROCESSING_ERROR_MESSAGE,
                Some(e.to_string()),
            ),
        }
    }
}

impl IntoResponse for HoroscopeResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

pub struct HoroscopeController<'a> {
    container: &'a Container,
}

impl<'a> HoroscopeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Answer a raw HTTP exchange: method gate, body decoding, then
    /// [`Self::horoscope`].
    pub async fn handle(&self, method: &Method, body: &[u8]) -> HoroscopeResponse {
        if *method == Method::OPTIONS {
            return HoroscopeResponse::empty(StatusCode::OK);
        }
        if *method != Method::POST {
            return HoroscopeResponse::error(
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED_MESSAGE,
                None,
            );
        }

        match decode_request(body) {
            Ok(request) => self.horoscope(request).await,
            Err(e) => {
                error!("{}", e);
                e.into()
            }
        }
    }

    pub async fn horoscope(&self, request: HoroscopeRequest) -> HoroscopeResponse {
        let use_case = self.container.horoscope_use_case();

        match use_case.execute(request).await {
            Ok(record) => HoroscopeResponse::json(StatusCode::OK, &record),
            Err(e) => {
                info!("Horoscope request failed: {}", e);
                e.into()
            }
        }
    }
}

/// An empty body counts as `{}`, which then fails sign validation. A body
/// that is not a JSON request object is an internal error (500), not a 400.
fn decode_request(body: &[u8]) -> Result<HoroscopeRequest, DomainError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(HoroscopeRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| DomainError::internal(format!("Invalid request body: {e}")))
}
