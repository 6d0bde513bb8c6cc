use hearth::http::response::{HTTP_VERSION, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_default_version() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.version, HTTP_VERSION);
    assert_eq!(response.version, "HTTP/1.1");
}

#[test]
fn test_response_builder_version_override() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .version("HTTP/1.0")
        .build();

    assert_eq!(response.version, "HTTP/1.0");
}

#[test]
fn test_response_builder_with_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(response.headers.get("X-Custom").unwrap(), "value");
}

#[test]
fn test_response_builder_adds_no_implicit_headers() {
    // The wire format carries exactly the headers that were set
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"some body".to_vec())
        .build();

    assert!(response.headers.is_empty());
}

#[test]
fn test_response_builder_header_replacement() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-Custom", "first")
        .header("X-Custom", "second")
        .build();

    assert_eq!(response.headers.get("X-Custom").unwrap(), "second");
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();

    assert!(response.body.is_empty());
}

#[test]
fn test_response_builder_various_status_codes() {
    let statuses = vec![
        StatusCode::Ok,
        StatusCode::BadRequest,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
    ];

    for status in statuses {
        let response = ResponseBuilder::new(status).body(b"test".to_vec()).build();
        assert_eq!(response.status, status);
    }
}
