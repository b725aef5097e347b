use super::*;

#[test]
fn ui_state_defaults_to_light_mode_expanded_nav() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_collapsed);
}
