//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - LLM access (OpenRouter over HTTP, scripted mock for tests and offline runs)
//! - Storage (in-memory per-sign horoscope cache)
//! - HTTP API (axum router, controller, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
