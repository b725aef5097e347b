//! Dashboard page — the authenticated landing route.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Overview page with a greeting and placeholder summary cards.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.email))
    };

    view! {
        <section class="page dashboard-page">
            <h1>{greeting}</h1>
            <div class="dashboard-page__cards">
                <div class="card">
                    <h2>"Attendance"</h2>
                    <p class="card__hint">"Clock-ins for today will appear here."</p>
                </div>
                <div class="card">
                    <h2>"Payroll"</h2>
                    <p class="card__hint">"Next pay run summary will appear here."</p>
                </div>
                <div class="card">
                    <h2>"Evaluations"</h2>
                    <p class="card__hint">"Pending reviews will appear here."</p>
                </div>
                <div class="card">
                    <h2>"Schedules"</h2>
                    <p class="card__hint">"This week's shifts will appear here."</p>
                </div>
            </div>
        </section>
    }
}
