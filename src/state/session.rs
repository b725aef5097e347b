//! Session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is constructed in `app::App` and provided via
//! context; route guards and user-aware components read it, and only the
//! transition methods here mutate it. Async completions go through the
//! `apply_*` methods so stale responses are discarded instead of racing.
//!
//! DESIGN
//! ======
//! Transitions are pure and synchronous; the network glue lives in pages and
//! effects. Every session-mutating operation is issued a monotonic sequence
//! number, and a completion is applied only while its number is still the
//! latest — a logout started mid-login invalidates the login's completion,
//! never the other way around.
//!
//! Permitted transitions:
//! `Idle -> Loading` (initial probe, never re-entered),
//! `Loading -> Authenticated | Unauthenticated` (probe resolution),
//! `Unauthenticated -> Authenticated` (login success),
//! `Authenticated | Unauthenticated -> Unauthenticated` (logout).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Authentication status of the running application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Process start; the initial probe has not been issued yet.
    #[default]
    Idle,
    /// The initial probe is in flight. Guards suspend rather than redirect.
    Loading,
    /// A live credential and identity are present.
    Authenticated,
    /// No live session; protected routes redirect to login.
    Unauthenticated,
}

/// Session state: status, identity, and the latest operation sequence.
///
/// Invariant: `status == Authenticated` if and only if `user` is present.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<Identity>,
    seq: u64,
}

impl SessionState {
    /// True once the session resolved to a live identity.
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Whether `seq` still names the latest issued operation.
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }

    fn issue_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Start the one-time startup probe. Returns the operation sequence to
    /// resolve it with, or `None` when the probe was already issued —
    /// `Loading` is never re-entered after process start.
    pub fn begin_probe(&mut self) -> Option<u64> {
        if self.status != SessionStatus::Idle {
            return None;
        }
        self.status = SessionStatus::Loading;
        Some(self.issue_seq())
    }

    /// Resolve the startup probe. A stale sequence is dropped unapplied, as
    /// is a resolution arriving after the probe already resolved.
    pub fn resolve_probe(&mut self, seq: u64, user: Option<Identity>) {
        if !self.is_current(seq) || self.status != SessionStatus::Loading {
            return;
        }
        match user {
            Some(user) => {
                self.user = Some(user);
                self.status = SessionStatus::Authenticated;
            }
            None => {
                self.user = None;
                self.status = SessionStatus::Unauthenticated;
            }
        }
    }

    /// Start a login exchange, invalidating any in-flight completion.
    /// The status stays as-is; form feedback is page-local.
    pub fn begin_login(&mut self) -> u64 {
        self.issue_seq()
    }

    /// Apply a successful login: the authority accepted the credentials and
    /// the re-fetched identity is `user`.
    pub fn apply_login_success(&mut self, seq: u64, user: Identity) {
        if !self.is_current(seq) {
            return;
        }
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
    }

    /// Apply a failed login (rejected credentials or transport failure).
    /// The session stays logged out; the caller shows the failure reason.
    pub fn apply_login_failure(&mut self, seq: u64) {
        if !self.is_current(seq) {
            return;
        }
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
    }

    /// Log out unconditionally. Takes effect immediately and invalidates any
    /// in-flight login or probe completion; the remote notification is
    /// fire-and-forget and never re-enters this state.
    pub fn logout(&mut self) {
        self.issue_seq();
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
    }
}
