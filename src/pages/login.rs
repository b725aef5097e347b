//! Login page with identifier + secret form and post-login resume.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. On success it resumes the
//! path the route guard stashed in the `from` query parameter.
//!
//! ERROR HANDLING
//! ==============
//! Rejected credentials and transport failures both land in an inline
//! message; nothing here throws past the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::require_session::resume_target;
use crate::state::session::SessionState;

/// Message shown when the authority rejects the credential pair.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Trim and require both form fields.
fn validate_login_input(
    identifier: &str,
    secret: &str,
) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    let secret = secret.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err("Enter both an identifier and a password.");
    }
    Ok((identifier.to_owned(), secret.to_owned()))
}

/// Message for a login that succeeded but whose identity fetch then failed.
#[cfg(any(test, feature = "hydrate"))]
fn profile_fetch_failed_message() -> String {
    "signed in, but loading your profile failed — try again".to_owned()
}

/// Login page — credential form plus inline failure feedback.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (or a login just landed): resume the stashed target.
    let navigate_resume = navigate.clone();
    Effect::new(move || {
        if session.get().is_authenticated() {
            let target = resume_target(query.get().get("from").as_deref());
            navigate_resume(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier_value, secret_value) =
            match validate_login_input(&identifier.get(), &secret.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let mut seq = 0;
        session.update(|s| seq = s.begin_login());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::auth::{self, LoginOutcome};

            match auth::login(&identifier_value, &secret_value).await {
                Ok(LoginOutcome::Accepted) => match auth::current_user().await {
                    Ok(user) => {
                        session.update(|s| s.apply_login_success(seq, user));
                    }
                    Err(probe) => {
                        log::warn!("post-login identity fetch failed: {probe:?}");
                        session.update(|s| s.apply_login_failure(seq));
                        error.set(profile_fetch_failed_message());
                    }
                },
                Ok(LoginOutcome::Rejected) => {
                    session.update(|s| s.apply_login_failure(seq));
                    error.set(INVALID_CREDENTIALS.to_owned());
                }
                Err(transport) => {
                    session.update(|s| s.apply_login_failure(seq));
                    error.set(transport.to_string());
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier_value, secret_value, seq);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Staffboard"</h1>
                <p class="login-card__subtitle">"Employee Dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="email or username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
