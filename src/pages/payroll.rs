//! Payroll page — placeholder content.

use leptos::prelude::*;

/// Payroll page. Static stub until the feature ships.
#[component]
pub fn PayrollPage() -> impl IntoView {
    view! {
        <section class="page payroll-page">
            <h1>"Payroll"</h1>
            <p class="page__placeholder">
                "Payroll is not available yet. Pay runs, slips, and deductions "
                "will be listed here."
            </p>
        </section>
    }
}
