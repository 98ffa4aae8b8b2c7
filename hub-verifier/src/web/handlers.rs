//! HTTP endpoint handlers.
//!
//! The webhook endpoint is a thin adapter: it turns the axum request into an
//! [`IncomingRequest`], runs the verification handler and writes the
//! [`HandlerResponse`] back out unchanged.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug_span, warn, Span};

use crate::verify::{HandlerResponse, IncomingRequest, VerificationHandler};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<VerificationHandler>,
}

impl AppState {
    pub fn new(handler: VerificationHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(VerificationHandler::new(config.verification.clone()))
    }
}

/// Build the application router.
pub fn router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(webhook_path, any(verify_webhook))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// Span for one HTTP request. The query string is left out because it
/// carries `hub.verify_token`.
fn request_span(request: &Request<Body>) -> Span {
    debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub verification_configured: bool,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        verification_configured: state.handler.config().is_configured(),
    })
}

// =============================================================================
// Verification Webhook
// =============================================================================

/// Verification endpoint, mounted for every method.
pub async fn verify_webhook(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> HandlerResponse {
    let request = IncomingRequest::from_http(method, &uri, &headers);
    state.handler.handle(&request)
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!(header = %name, "response_header_invalid"),
            }
        }

        response
    }
}
