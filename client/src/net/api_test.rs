use super::*;

#[test]
fn chat_endpoint_is_origin_relative() {
    assert_eq!(CHAT_ENDPOINT, "/chat");
}

#[test]
fn chat_failed_message_formats_status() {
    assert_eq!(chat_failed_message(502), "chat request failed: 502");
}

#[test]
fn chat_timeout_message_names_the_deadline() {
    assert_eq!(chat_timeout_message(), "chat request timed out after 30000ms");
}
