//! Rejection taxonomy for the verification handshake.

use thiserror::Error;

use super::types::HandlerResponse;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Why a handshake did not verify.
///
/// All of these produce the same 403 for the caller; the distinction only
/// shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    ModeMissing,
    ModeNotSubscribe,
    TokenMissing,
    TokenMismatch,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::ModeMissing => "mode_missing",
            FailureReason::ModeNotSubscribe => "mode_not_subscribe",
            FailureReason::TokenMissing => "token_missing",
            FailureReason::TokenMismatch => "token_mismatch",
        }
    }
}

/// A request that cannot be answered with the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Server configuration error.")]
    NotConfigured,

    #[error("Bad Request: Missing hub.challenge parameter.")]
    MissingChallenge,

    #[error("Forbidden: Verification failed.")]
    VerificationFailed(FailureReason),

    #[error("Method Not Allowed.")]
    MethodNotAllowed,
}

impl Rejection {
    pub fn status_code(&self) -> u16 {
        match self {
            Rejection::NotConfigured => 500,
            Rejection::MissingChallenge => 400,
            Rejection::VerificationFailed(_) => 403,
            Rejection::MethodNotAllowed => 405,
        }
    }

    /// Short category name for logs.
    pub fn category(&self) -> &'static str {
        match self {
            Rejection::NotConfigured => "configuration",
            Rejection::MissingChallenge => "client_protocol",
            Rejection::VerificationFailed(_) => "authorization",
            Rejection::MethodNotAllowed => "method_not_supported",
        }
    }
}

impl From<Rejection> for HandlerResponse {
    fn from(rejection: Rejection) -> Self {
        let response =
            HandlerResponse::new(rejection.status_code(), TEXT_PLAIN, rejection.to_string());
        match rejection {
            Rejection::MethodNotAllowed => response.with_header("allow", "GET"),
            _ => response,
        }
    }
}
