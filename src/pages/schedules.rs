//! Schedules page — placeholder content.

use leptos::prelude::*;

/// Shift schedules page. Static stub until the feature ships.
#[component]
pub fn SchedulesPage() -> impl IntoView {
    view! {
        <section class="page schedules-page">
            <h1>"Schedules"</h1>
            <p class="page__placeholder">
                "Schedules are not available yet. Shift plans and swap requests "
                "will be listed here."
            </p>
        </section>
    }
}
