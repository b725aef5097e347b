//! Session service: login, logout, and silent session probing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the credential lifecycle against the remote authority. Successful
//! login writes the token store before returning; logout clears it before
//! the remote call is even attempted.
//!
//! ERROR HANDLING
//! ==============
//! A rejected credential pair is a normal `LoginOutcome::Rejected`, not an
//! error. Probe failures keep their kind (`ProbeError`) so callers and tests
//! can tell a 401 from an unreachable server, even though the session layer
//! deliberately coerces all of them to "logged out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::TransportError;
use crate::net::types::Identity;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::LoginResponse;
use crate::util::token_store;

#[cfg(feature = "hydrate")]
use crate::net::http;
#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;

/// Result of a completed login exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the token store now holds the new credential.
    Accepted,
    /// Credentials rejected by the authority (401 or `success: false`).
    Rejected,
}

/// Why a silent session probe failed.
///
/// Every variant resolves to "no session" at the session layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeError {
    /// The authority answered 401: no live session behind the credential.
    Unauthorized,
    /// The request never completed or the server answered non-2xx.
    Transport(TransportError),
    /// The authority answered 2xx with an unparseable body.
    Malformed,
}

/// Classify a login response status before the body is parsed.
///
/// `Ok(Some(..))` short-circuits with an outcome (401 is a rejection, not a
/// failure), `Ok(None)` means the body decides, and non-2xx otherwise is a
/// transport failure.
#[cfg(any(test, feature = "hydrate"))]
fn classify_login_status(status: u16) -> Result<Option<LoginOutcome>, TransportError> {
    match status {
        401 => Ok(Some(LoginOutcome::Rejected)),
        s if (200..300).contains(&s) => Ok(None),
        s => Err(TransportError::status(s)),
    }
}

/// Split a login response body into its outcome and any issued credential.
#[cfg(any(test, feature = "hydrate"))]
fn classify_login_body(body: LoginResponse) -> (LoginOutcome, Option<String>) {
    if body.success {
        (LoginOutcome::Accepted, body.token)
    } else {
        (LoginOutcome::Rejected, None)
    }
}

/// Exchange a credential pair for a bearer token via `POST /login`.
///
/// On acceptance the token store is updated before this function returns.
///
/// # Errors
///
/// Returns `TransportError` when the exchange itself fails; a 401 or a
/// `success: false` body is `Ok(LoginOutcome::Rejected)`.
pub async fn login(identifier: &str, secret: &str) -> Result<LoginOutcome, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            identifier: identifier.to_owned(),
            secret: secret.to_owned(),
        };
        let resp = http::post_json("/login", &body).await?;
        if let Some(outcome) = classify_login_status(resp.status())? {
            return Ok(outcome);
        }
        let parsed: LoginResponse = resp
            .json()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;
        let (outcome, token) = classify_login_body(parsed);
        if let Some(token) = token {
            token_store::set(&token);
        }
        Ok(outcome)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, secret);
        Err(TransportError::network("not available on server"))
    }
}

/// Drop the local credential, then best-effort notify the authority.
///
/// The remote call is fire-and-forget: its failure is never surfaced.
pub async fn logout() {
    token_store::clear();
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = http::post("/logout").await {
            log::debug!("logout notification failed: {e}");
        }
    }
}

/// Fetch the identity behind the current credential via `GET /me`.
///
/// # Errors
///
/// Returns `ProbeError` on any failure; callers treat all kinds as
/// "no session".
pub async fn current_user() -> Result<Identity, ProbeError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get("/me").await.map_err(ProbeError::Transport)?;
        if resp.status() == 401 {
            return Err(ProbeError::Unauthorized);
        }
        if !resp.ok() {
            return Err(ProbeError::Transport(TransportError::status(resp.status())));
        }
        resp.json::<Identity>().await.map_err(|_| ProbeError::Malformed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ProbeError::Transport(TransportError::network(
            "not available on server",
        )))
    }
}
