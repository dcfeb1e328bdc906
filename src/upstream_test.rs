use super::*;

#[test]
fn parse_response_accepts_valid_body() {
    let body = serde_json::json!({
        "session_id": "s1",
        "response": "Added coffee. Anything else?",
        "intent": "order",
        "entities": [{"type": "beverage", "value": "coffee"}],
        "total_price": 1.5
    })
    .to_string();

    let response = parse_response(&body).expect("parse");
    assert_eq!(response.session_id, "s1");
    assert_eq!(response.entities.len(), 1);
}

#[test]
fn parse_response_rejects_malformed_body() {
    let err = parse_response("<html>upstream exploded</html>").expect_err("must fail");
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[test]
fn parse_response_rejects_incomplete_body() {
    let err = parse_response(r#"{"intent": "order"}"#).expect_err("must fail");
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[test]
fn status_error_formats_status_and_body() {
    let err = UpstreamError::Status {
        status: 503,
        body: "unavailable".to_owned(),
    };
    assert_eq!(err.to_string(), "upstream returned status 503: unavailable");
}

#[test]
fn client_builds_with_timeouts() {
    assert!(UpstreamClient::new("http://localhost:8000/chat".to_owned()).is_ok());
}
