//! Error types for the festival API.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Every variant renders as a JSON body of the form `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authenticated")]
    MissingApiKey,

    #[error("Invalid API Key")]
    InvalidApiKey,

    /// Caller exhausted its quota; `retry_after` is when the oldest
    /// counted request leaves the window.
    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Duration, limit: usize },

    /// The server was not wired with connection info, so no caller key exists.
    #[error("caller identity unavailable")]
    MissingCallerIdentity,

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::InvalidApiKey => StatusCode::FORBIDDEN,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::MissingCallerIdentity => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        let mut response = (self.status(), body).into_response();

        if let ApiError::RateLimited { retry_after, limit } = self {
            let headers = response.headers_mut();
            headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs(retry_after)));
            headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
            headers.insert("x-ratelimit-remaining", HeaderValue::from(0u32));
        }

        response
    }
}

// Whole seconds, rounded up, never zero
fn retry_after_secs(d: Duration) -> u64 {
    let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
    secs.max(1)
}

/// Invalid rate limiter settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rate limit must allow at least one request per window")]
    ZeroMaxRequests,

    #[error("rate limit window must be longer than zero")]
    ZeroWindow,
}
