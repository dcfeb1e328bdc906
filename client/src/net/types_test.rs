use super::*;

#[test]
fn turn_debug_mirrors_response_fields() {
    let response = ChatResponse {
        session_id: "s1".to_owned(),
        response: "Added latte.".to_owned(),
        intent: "order".to_owned(),
        entities: vec![Entity {
            kind: "beverage".to_owned(),
            value: "latte".to_owned(),
        }],
        total_price: 2.8,
    };

    let debug = TurnDebug::from_response(&response);
    assert_eq!(debug.intent, "order");
    assert_eq!(debug.entities, response.entities);
    assert!((debug.total - 2.8).abs() < f64::EPSILON);
}

#[test]
fn turn_debug_serializes_with_wire_field_names() {
    let debug = TurnDebug {
        intent: "order".to_owned(),
        entities: vec![Entity {
            kind: "size".to_owned(),
            value: "large".to_owned(),
        }],
        total: 0.0,
    };

    let json = serde_json::to_value(&debug).expect("serialize");
    assert_eq!(json["intent"], "order");
    assert_eq!(json["total"], 0.0);
    assert_eq!(json["entities"][0]["type"], "size");
}
