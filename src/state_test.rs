use super::*;

#[test]
fn app_state_is_cheaply_cloneable_for_handlers() {
    let upstream = UpstreamClient::new("http://127.0.0.1:9/chat".to_owned()).expect("client");
    let state = AppState::new(upstream);
    let _clone = state.clone();
}
