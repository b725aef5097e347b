//! Attendance page — placeholder content.

use leptos::prelude::*;

/// Attendance tracking page. Static stub until the feature ships.
#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <section class="page attendance-page">
            <h1>"Attendance"</h1>
            <p class="page__placeholder">
                "Attendance tracking is not available yet. Clock-in and leave "
                "records will be listed here."
            </p>
        </section>
    }
}
