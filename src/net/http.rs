//! Authenticated HTTP transport for the remote authority.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound request goes through this module so the bearer credential
//! is attached in exactly one place; callers never set the `Authorization`
//! header themselves. The base endpoint comes from the build environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport-level failures (network unreachable, non-2xx) surface as
//! `TransportError` with the status code populated only when the server
//! actually responded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

#[cfg(feature = "hydrate")]
use crate::util::token_store;

/// Base URL prefix for the remote authority, fixed at build time.
pub fn auth_base() -> &'static str {
    option_env!("STAFFBOARD_AUTH_BASE").unwrap_or("/api/auth")
}

/// Join an endpoint path onto the configured base.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{path}", auth_base())
}

/// `Authorization` header value for a bearer credential.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// A transport-level failure: the request never completed, or the server
/// answered outside the 2xx range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError {
    /// Human-readable failure description, shown to the user on login.
    pub message: String,
    /// HTTP status, present only when the server responded.
    pub status: Option<u16>,
}

impl TransportError {
    /// Failure before any server response (network unreachable, CORS, etc.).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Failure where the server responded outside the 2xx range.
    pub fn status(status: u16) -> Self {
        Self {
            message: format!("request failed: {status}"),
            status: Some(status),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Send a GET to the authority, attaching the bearer credential if present.
#[cfg(feature = "hydrate")]
pub(crate) async fn get(path: &str) -> Result<gloo_net::http::Response, TransportError> {
    let mut req = gloo_net::http::Request::get(&endpoint(path));
    if let Some(token) = token_store::get() {
        req = req.header("Authorization", &bearer_value(&token));
    }
    req.send()
        .await
        .map_err(|e| TransportError::network(e.to_string()))
}

/// Send a POST with a JSON body, attaching the bearer credential if present.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<gloo_net::http::Response, TransportError> {
    let mut req = gloo_net::http::Request::post(&endpoint(path));
    if let Some(token) = token_store::get() {
        req = req.header("Authorization", &bearer_value(&token));
    }
    req.json(body)
        .map_err(|e| TransportError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::network(e.to_string()))
}

/// Send a bodyless POST, attaching the bearer credential if present.
#[cfg(feature = "hydrate")]
pub(crate) async fn post(path: &str) -> Result<gloo_net::http::Response, TransportError> {
    let mut req = gloo_net::http::Request::post(&endpoint(path));
    if let Some(token) = token_store::get() {
        req = req.header("Authorization", &bearer_value(&token));
    }
    req.send()
        .await
        .map_err(|e| TransportError::network(e.to_string()))
}
