use super::*;

#[test]
fn ui_state_default_hides_debug_panel() {
    let state = UiState::default();
    assert!(!state.debug_open);
}
