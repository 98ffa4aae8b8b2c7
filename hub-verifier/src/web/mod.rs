//! Web server module.
//!
//! Exposes the verification handler over HTTP:
//! - `ANY <webhook path>`: subscription handshake
//! - `GET /health`: liveness plus whether a verify token is configured

pub mod handlers;

pub use handlers::{health, router, verify_webhook, AppState, HealthResponse};
