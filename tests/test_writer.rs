use hearth::http::parser::parse_http_request;
use hearth::http::request::QueryPolicy;
use hearth::http::response::{ResponseBuilder, StatusCode};
use hearth::http::writer::serialize_response;

#[test]
fn test_serialize_response_without_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"hello".to_vec())
        .build();

    // Status line and header block each end in a single \n
    assert_eq!(serialize_response(&response), b"HTTP/1.1 200 OK\n\nhello");
}

#[test]
fn test_serialize_response_single_header() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Server", "hearth")
        .body(b"hi".to_vec())
        .build();

    assert_eq!(
        serialize_response(&response),
        b"HTTP/1.1 200 OK\nServer: hearth\nhi"
    );
}

#[test]
fn test_serialize_response_headers_joined_with_crlf() {
    // Headers iterate in name order, joined (not terminated) by \r\n
    let response = ResponseBuilder::new(StatusCode::NotFound)
        .header("Alpha", "1")
        .header("Beta", "2")
        .body(b"gone".to_vec())
        .build();

    assert_eq!(
        serialize_response(&response),
        b"HTTP/1.1 404 Not Found\nAlpha: 1\r\nBeta: 2\ngone"
    );
}

#[test]
fn test_serialize_error_response() {
    let response = ResponseBuilder::new(StatusCode::BadRequest)
        .body(b"bad".to_vec())
        .build();

    assert_eq!(
        serialize_response(&response),
        b"HTTP/1.1 400 Bad Request\n\nbad"
    );
}

#[test]
fn test_serialize_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(serialize_response(&response), b"HTTP/1.1 200 OK\n\n");
}

#[test]
fn test_parse_then_serialize_round_trips_version() {
    // A well-formed request with headers and no body produces a 200 whose
    // status line carries the request's version back
    let raw = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let request = parse_http_request(raw, QueryPolicy::Reject).unwrap();

    let response = ResponseBuilder::new(StatusCode::Ok)
        .version(request.version.clone())
        .body(b"<html></html>".to_vec())
        .build();
    let wire = serialize_response(&response);

    assert!(wire.starts_with(b"HTTP/1.1 200 OK"));
}
