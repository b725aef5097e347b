//! Route guard gating protected pages on session status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in `RequireSession` so unauthenticated
//! redirect behavior is identical across pages. The decision is re-evaluated
//! on each navigation and on every session status transition.
//!
//! While the startup probe is in flight the guard renders nothing at all —
//! redirecting then would flash the login page at users who are about to be
//! recognized.

#[cfg(test)]
#[path = "require_session_test.rs"]
mod require_session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{SessionState, SessionStatus};

/// What the guard does with a navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; render nothing.
    Wait,
    /// No session; send the browser to login, remembering the target.
    RedirectToLogin {
        /// The originally requested path, resumed after login.
        from: String,
    },
    /// Live session; render the requested target.
    Render,
}

/// Decide whether `requested` is reachable under `status`.
pub fn evaluate(status: SessionStatus, requested: &str) -> GuardDecision {
    match status {
        SessionStatus::Idle | SessionStatus::Loading => GuardDecision::Wait,
        SessionStatus::Unauthenticated => GuardDecision::RedirectToLogin {
            from: requested.to_owned(),
        },
        SessionStatus::Authenticated => GuardDecision::Render,
    }
}

/// The full navigation target: path plus query string, when one is present.
pub fn requested_target(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Login route carrying the originally requested target, percent-encoded so
/// its own query string survives the round trip.
pub fn login_route(from: &str) -> String {
    format!("/login?from={}", urlencoding::encode(from))
}

/// Target to resume after login. Only same-origin absolute paths are
/// accepted; anything undecodable or external falls back to the dashboard.
pub fn resume_target(from: Option<&str>) -> String {
    let Some(raw) = from else {
        return "/".to_owned();
    };
    let Ok(decoded) = urlencoding::decode(raw) else {
        return "/".to_owned();
    };
    if decoded.starts_with('/') && !decoded.starts_with("//") {
        decoded.into_owned()
    } else {
        "/".to_owned()
    }
}

/// Wrap a protected route: suspends while the session resolves, redirects to
/// login when there is none, and renders children otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let requested = requested_target(&location.pathname.get(), &location.search.get());
        if let GuardDecision::RedirectToLogin { from } =
            evaluate(session.get().status, &requested)
        {
            navigate(&login_route(&from), NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}
