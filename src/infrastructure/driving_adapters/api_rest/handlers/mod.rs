//! HTTP Handlers
//!
//! Thin adapters from HTTP to use cases. Every failure is turned into an
//! `{"error": "<message>"}` response at this boundary.

pub mod hero_powers;
pub mod heroes;
pub mod powers;

use std::any::Any;

use axum::response::{Html, IntoResponse, Response};

use crate::shared::errors::ApiError;

/// GET / - Liveness banner
pub async fn index() -> Html<&'static str> {
    Html("<h1>Hero Powers Registry - API is Running</h1>")
}

/// Fallback for requests no route matches
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for a known path called with a method it does not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Response for a handler that panicked
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

/// Parse a numeric path segment. Anything else does not name a resource.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::RouteNotFound)
}
