//! Side navigation listing the HR feature pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// Navigation entries in display order.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/attendance", "Attendance"),
    ("/payroll", "Payroll"),
    ("/evaluations", "Evaluations"),
    ("/schedules", "Schedules"),
];

/// Collapsible sidebar with links to each feature page.
#[component]
pub fn SideNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let on_collapse = move |_| ui.update(|u| u.nav_collapsed = !u.nav_collapsed);

    view! {
        <nav class="side-nav" class=("side-nav--collapsed", move || ui.get().nav_collapsed)>
            <button class="side-nav__collapse" on:click=on_collapse title="Toggle navigation">
                {move || if ui.get().nav_collapsed { ">" } else { "<" }}
            </button>
            <ul class="side-nav__list">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, label)| {
                        let active = move || location.pathname.get() == path;
                        view! {
                            <li class="side-nav__item" class=("side-nav__item--active", active)>
                                <a href=path>{label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
