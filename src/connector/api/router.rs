use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use super::container::Container;
use super::controller::{HoroscopeController, HoroscopeResponse};

pub const HOROSCOPE_PATH: &str = "/api/horoscope";
/// Path the serverless deployment exposed; kept so old clients keep working.
pub const HOROSCOPE_PATH_ALIAS: &str = "/api/horoscope.py";
pub const NOT_FOUND_MESSAGE: &str = "Caminho não encontrado";

async fn horoscope_handler(
    State(container): State<Arc<Container>>,
    method: Method,
    body: Bytes,
) -> HoroscopeResponse {
    HoroscopeController::new(&container)
        .handle(&method, &body)
        .await
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK\n")
}

async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Preflights are answered on every path; anything else is unknown.
async fn fallback_handler(method: Method) -> Response {
    if method == Method::OPTIONS {
        return preflight_handler().await.into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": NOT_FOUND_MESSAGE })),
    )
        .into_response()
}

/// Build the HTTP application. Every response, errors included, carries the
/// CORS headers browsers need to call the API from another origin.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route(HOROSCOPE_PATH, any(horoscope_handler))
        .route(HOROSCOPE_PATH_ALIAS, any(horoscope_handler))
        .route("/health", get(health_handler).options(preflight_handler))
        .fallback(fallback_handler)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .with_state(container)
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(container);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("Endpoints: http://{addr}{HOROSCOPE_PATH} and http://{addr}{HOROSCOPE_PATH_ALIAS}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Server shutting down gracefully");
        })
        .await?;

    Ok(())
}
