//! Request pipeline gates: per-caller rate limiting and the API key check.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::rate_limit::Decision;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

// Caller key is the remote IP; the port changes per connection
pub fn caller_key(request: &Request) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Consult the limiter once per request, before any handler logic.
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    REQUEST_TOTAL.inc();

    let Some(caller) = caller_key(&request) else {
        error!(path = %request.uri().path(), "No connection info on request; serve with connect info enabled");
        return Err(ApiError::MissingCallerIdentity);
    };

    let limit = state.limiter.config().max_requests;
    match state.limiter.check(&caller) {
        Decision::Reject { retry_after } => {
            RATE_LIMITED_TOTAL.inc();
            warn!(caller = %caller, ?retry_after, "Rate limit exceeded");
            Err(ApiError::RateLimited { retry_after, limit })
        }
        Decision::Admit { remaining } => {
            let start_time = Instant::now();
            let mut response = next.run(request).await;
            REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

            let headers = response.headers_mut();
            headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
            headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
            Ok(response)
        }
    }
}

/// Reject mutating requests that do not present the shared API key.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if matches!(*request.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return Ok(next.run(request).await);
    }

    match request.headers().get(API_KEY_HEADER) {
        None => {
            debug!(path = %request.uri().path(), "Missing API key");
            Err(ApiError::MissingApiKey)
        }
        Some(key) if !state.api_key_matches(key.as_bytes()) => {
            warn!(path = %request.uri().path(), "Invalid API key");
            Err(ApiError::InvalidApiKey)
        }
        Some(_) => Ok(next.run(request).await),
    }
}
