//! Subscription verification handshake.
//!
//! The handler runs synchronously and never fails: every request, including
//! misconfigured ones, resolves to a [`HandlerResponse`].

use std::sync::Arc;

use tracing::{error, info, info_span, warn};

use crate::config::VerificationConfig;
use crate::util::{IdGenerator, RandomIdGenerator};

use super::rejection::{FailureReason, Rejection};
use super::types::{
    HandlerResponse, IncomingRequest, Method, CHALLENGE_PARAM, MODE_PARAM, SUBSCRIBE_MODE,
    VERIFY_TOKEN_PARAM,
};

const CHALLENGE_CONTENT_TYPE: &str = "text/plain";

/// Answers `hub.challenge` handshakes against a fixed expected token.
#[derive(Clone)]
pub struct VerificationHandler {
    config: VerificationConfig,
    ids: Arc<dyn IdGenerator>,
}

impl VerificationHandler {
    /// Handler with random correlation identifiers.
    pub fn new(config: VerificationConfig) -> Self {
        Self::with_id_generator(config, Arc::new(RandomIdGenerator))
    }

    pub fn with_id_generator(config: VerificationConfig, ids: Arc<dyn IdGenerator>) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Handle one request.
    pub fn handle(&self, request: &IncomingRequest) -> HandlerResponse {
        let request_id = self.ids.next_id();
        let span = info_span!("verify_request", request_id = %request_id);
        let _guard = span.enter();

        info!(
            method = %request.method(),
            has_mode = request.query_param(MODE_PARAM).is_some(),
            has_verify_token = request.query_param(VERIFY_TOKEN_PARAM).is_some(),
            has_challenge = request.query_param(CHALLENGE_PARAM).is_some(),
            "verification_request_received"
        );

        match self.verify(request) {
            Ok(challenge) => {
                info!(challenge_length = challenge.len(), "verification_succeeded");
                HandlerResponse::new(200, CHALLENGE_CONTENT_TYPE, challenge)
            }
            Err(rejection) => {
                log_rejection(&rejection);
                rejection.into()
            }
        }
    }

    /// Run the checks and return the challenge to echo.
    fn verify<'a>(&self, request: &'a IncomingRequest) -> Result<&'a str, Rejection> {
        let expected = self.config.expected_token().ok_or(Rejection::NotConfigured)?;

        if request.method() != Method::GET {
            return Err(Rejection::MethodNotAllowed);
        }

        let mode = request
            .query_param(MODE_PARAM)
            .ok_or(Rejection::VerificationFailed(FailureReason::ModeMissing))?;
        if mode != SUBSCRIBE_MODE {
            return Err(Rejection::VerificationFailed(FailureReason::ModeNotSubscribe));
        }

        let token = request
            .query_param(VERIFY_TOKEN_PARAM)
            .ok_or(Rejection::VerificationFailed(FailureReason::TokenMissing))?;
        if token != expected {
            return Err(Rejection::VerificationFailed(FailureReason::TokenMismatch));
        }

        request
            .query_param(CHALLENGE_PARAM)
            .ok_or(Rejection::MissingChallenge)
    }
}

fn log_rejection(rejection: &Rejection) {
    let status = rejection.status_code();
    let category = rejection.category();

    match rejection {
        Rejection::NotConfigured => {
            error!(status, category, "verification_not_configured");
        }
        Rejection::MissingChallenge => {
            warn!(status, category, "verification_challenge_missing");
        }
        Rejection::VerificationFailed(reason) => {
            warn!(status, category, reason = reason.as_str(), "verification_failed");
        }
        Rejection::MethodNotAllowed => {
            warn!(status, category, "verification_method_not_allowed");
        }
    }
}
