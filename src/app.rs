//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructs the session and UI state exactly once per running app, issues
//! the one-time startup probe, and wires every protected route through the
//! session guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::require_session::RequireSession;
use crate::components::side_nav::SideNav;
use crate::components::top_bar::TopBar;
use crate::pages::{
    attendance::AttendancePage, dashboard::DashboardPage, evaluations::EvaluationsPage,
    login::LoginPage, payroll::PayrollPage, schedules::SchedulesPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, starts the session probe, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::init(),
        ..UiState::default()
    });

    provide_context(session);
    provide_context(ui);

    start_session_probe(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/staffboard.css"/>
        <Title text="Staffboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("attendance") view=AttendancePage/>
                    <Route path=StaticSegment("payroll") view=PayrollPage/>
                    <Route path=StaticSegment("evaluations") view=EvaluationsPage/>
                    <Route path=StaticSegment("schedules") view=SchedulesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Issue the one-time startup probe and resolve it asynchronously.
///
/// Probe failures of any kind resolve to "no session"; the kind is logged
/// but deliberately not distinguished in state (matching the authority's
/// thin contract — an unreachable server looks like being logged out).
fn start_session_probe(session: RwSignal<SessionState>) {
    let mut issued = None;
    session.update(|s| issued = s.begin_probe());
    let Some(seq) = issued else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = match crate::net::auth::current_user().await {
            Ok(user) => Some(user),
            Err(probe) => {
                log::debug!("session probe resolved to logged-out: {probe:?}");
                None
            }
        };
        session.update(|s| s.resolve_probe(seq, user));
    });

    // On the server there is no credential to probe with; resolve straight
    // to logged-out so SSR never hangs in `Loading`.
    #[cfg(not(feature = "hydrate"))]
    session.update(|s| s.resolve_probe(seq, None));
}

/// Authenticated chrome: top bar, side navigation, and the routed page.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireSession>
            <div class="shell">
                <TopBar/>
                <div class="shell__body">
                    <SideNav/>
                    <main class="shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </RequireSession>
    }
}
