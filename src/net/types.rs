//! Wire DTOs for the authentication boundary.
//!
//! DESIGN
//! ======
//! These types mirror the remote authority's JSON payloads exactly so serde
//! round-trips stay lossless. Identities are replaced wholesale on re-fetch,
//! never patched field-by-field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `GET /me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier (opaque server string).
    pub id: String,
    /// Login email address.
    pub email: String,
}

/// Request body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account identifier (email or username).
    pub identifier: String,
    /// Account secret.
    pub secret: String,
}

/// Response body for `POST /login`.
///
/// A rejected credential pair is a normal response (`success: false`), not a
/// transport failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the credential pair was accepted.
    pub success: bool,
    /// Bearer credential, present only when `success` is true.
    #[serde(default)]
    pub token: Option<String>,
}
