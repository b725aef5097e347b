//! Local UI chrome state (dark mode, navigation collapse).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session state so shell
//! chrome can evolve independently of the authentication core.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_collapsed: bool,
}
