use super::*;

#[test]
fn request_errors_map_to_bad_gateway() {
    let err = UpstreamError::Request("connection refused".to_owned());
    assert_eq!(upstream_error_to_status(err), StatusCode::BAD_GATEWAY);
}

#[test]
fn status_errors_map_to_bad_gateway() {
    let err = UpstreamError::Status {
        status: 500,
        body: "boom".to_owned(),
    };
    assert_eq!(upstream_error_to_status(err), StatusCode::BAD_GATEWAY);
}

#[test]
fn decode_errors_map_to_bad_gateway() {
    let wire_err = wire::decode_chat_response("not json").expect_err("must fail");
    assert_eq!(
        upstream_error_to_status(UpstreamError::Decode(wire_err)),
        StatusCode::BAD_GATEWAY
    );
}
