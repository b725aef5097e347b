//! Top bar with product name, current user, dark-mode toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place logout is initiated. The local session transitions first
//! (the route guard reacts immediately); the remote notification is
//! fire-and-forget.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Shell top bar rendered above every protected page.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |user| user.email)
    };

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        session.update(SessionState::logout);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::auth::logout());
        #[cfg(not(feature = "hydrate"))]
        crate::util::token_store::clear();
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"Staffboard"</span>
            <div class="top-bar__actions">
                <button
                    class="top-bar__toggle"
                    on:click=on_toggle_dark
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
                <span class="top-bar__user">{email}</span>
                <button class="top-bar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
