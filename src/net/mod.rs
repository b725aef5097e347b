//! Networking modules for the remote authority boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the authenticated transport, `auth` is the session service on
//! top of it, and `types` defines the shared wire schema.

pub mod auth;
pub mod http;
pub mod types;
