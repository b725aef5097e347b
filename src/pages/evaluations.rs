//! Evaluations page — placeholder content.

use leptos::prelude::*;

/// Performance evaluations page. Static stub until the feature ships.
#[component]
pub fn EvaluationsPage() -> impl IntoView {
    view! {
        <section class="page evaluations-page">
            <h1>"Evaluations"</h1>
            <p class="page__placeholder">
                "Evaluations are not available yet. Review cycles and feedback "
                "forms will be listed here."
            </p>
        </section>
    }
}
