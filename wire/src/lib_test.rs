use super::*;

fn entity(kind: &str, value: &str) -> Entity {
    Entity {
        kind: kind.to_owned(),
        value: value.to_owned(),
    }
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn chat_request_serializes_null_session_on_first_turn() {
    let request = ChatRequest {
        message: "a large latte".to_owned(),
        session_id: None,
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["message"], "a large latte");
    assert!(json["session_id"].is_null());
}

#[test]
fn chat_request_serializes_existing_session() {
    let request = ChatRequest {
        message: "and a donut".to_owned(),
        session_id: Some("abc-123".to_owned()),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["session_id"], "abc-123");
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_accepts_full_response() {
    let body = r#"{
        "session_id": "s1",
        "response": "Got it! Added latte to your order.",
        "intent": "order",
        "entities": [
            {"type": "beverage", "value": "latte"},
            {"type": "size", "value": "large"}
        ],
        "total_price": 2.8
    }"#;
    let response = decode_chat_response(body).expect("decode");
    assert_eq!(response.session_id, "s1");
    assert_eq!(response.intent, "order");
    assert_eq!(response.entities.len(), 2);
    assert_eq!(response.entities[0], entity("beverage", "latte"));
    assert!((response.total_price - 2.8).abs() < f64::EPSILON);
}

#[test]
fn decode_defaults_missing_entities_and_total() {
    let body = r#"{"session_id": "s1", "response": "Hello!", "intent": "greeting"}"#;
    let response = decode_chat_response(body).expect("decode");
    assert!(response.entities.is_empty());
    assert!(response.total_price.abs() < f64::EPSILON);
}

#[test]
fn decode_defaults_missing_entity_value_to_empty() {
    let body = r#"{
        "session_id": "s1",
        "response": "ok",
        "intent": "order",
        "entities": [{"type": "beverage"}],
        "total_price": 1.5
    }"#;
    let response = decode_chat_response(body).expect("decode");
    assert_eq!(response.entities[0], entity("beverage", ""));
}

#[test]
fn decode_rejects_missing_session_id() {
    let body = r#"{"response": "ok", "intent": "order"}"#;
    let err = decode_chat_response(body).expect_err("must fail");
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn decode_rejects_missing_response_text() {
    let body = r#"{"session_id": "s1", "intent": "order"}"#;
    assert!(decode_chat_response(body).is_err());
}

#[test]
fn decode_rejects_non_json_body() {
    assert!(decode_chat_response("<html>Bad Gateway</html>").is_err());
}

#[test]
fn response_round_trips_through_json() {
    let response = ChatResponse {
        session_id: "s2".to_owned(),
        response: "Anything else?".to_owned(),
        intent: "add_item".to_owned(),
        entities: vec![entity("food", "croissant")],
        total_price: 3.0,
    };
    let json = serde_json::to_string(&response).expect("serialize");
    let back = decode_chat_response(&json).expect("decode");
    assert_eq!(back, response);
}

// =============================================================
// Entity classification
// =============================================================

#[test]
fn beverage_and_food_are_order_items() {
    assert!(entity("beverage", "latte").is_order_item());
    assert!(entity("food", "bagel").is_order_item());
    assert!(!entity("size", "large").is_order_item());
    assert!(!entity("quantity", "2").is_order_item());
}

#[test]
fn only_size_entities_are_sizes() {
    assert!(entity("size", "medium").is_size());
    assert!(!entity("beverage", "tea").is_size());
}
