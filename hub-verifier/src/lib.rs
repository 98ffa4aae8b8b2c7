//! Hub Verifier - webhook subscription verification service.
//!
//! Push-notification providers confirm a webhook subscription by sending a
//! `GET` with `hub.mode=subscribe`, the shared `hub.verify_token` and a
//! `hub.challenge` that must be echoed back. This crate answers that
//! handshake and rejects everything else with a fixed response.
//!
//! ## Architecture
//!
//! ```text
//! HTTP → web::verify_webhook → IncomingRequest → VerificationHandler → HandlerResponse
//! ```

pub mod config;
pub mod util;
pub mod verify;
pub mod web;

// Re-export commonly used types
pub use config::{Config, VerificationConfig};
pub use util::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use verify::{HandlerResponse, IncomingRequest, Rejection, VerificationHandler};
pub use web::AppState;
