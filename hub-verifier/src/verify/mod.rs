//! Webhook subscription verification.
//!
//! ## Handshake
//!
//! ```text
//! GET ?hub.mode=subscribe&hub.verify_token=<token>&hub.challenge=<value>
//!   → 200 <value>
//! ```
//!
//! Every other shape of request is answered with a fixed error response.

pub mod handshake;
pub mod rejection;
pub mod types;

pub use handshake::VerificationHandler;
pub use rejection::{FailureReason, Rejection};
pub use types::{
    HandlerResponse, IncomingRequest, Method, CHALLENGE_PARAM, MODE_PARAM, SUBSCRIBE_MODE,
    VERIFY_TOKEN_PARAM,
};
