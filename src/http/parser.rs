use crate::http::headers::Headers;
use crate::http::request::{Method, QueryPolicy, Request};
use crate::http::response::StatusCode;

/// Ways an inbound message can fail to parse.
///
/// Every variant is a client fault and maps to 400 Bad Request; none of
/// them escapes the connection layer as a raw error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequestLine,
    InvalidMethod,
    MissingHeaders,
    UnterminatedHeaders,
    InvalidHeader,
    InvalidContentLength,
    InvalidQuery,
    InvalidEncoding,
}

impl ParseError {
    /// Status code for the error response this failure turns into.
    pub fn status(&self) -> StatusCode {
        StatusCode::BadRequest
    }
}

/// Parses one complete HTTP request from `buf`.
///
/// The whole message is expected to be buffered already: the header section
/// up to the `\r\n\r\n` terminator, plus however much of the body arrived
/// with it. One forward scan, no backtracking:
///
/// 1. The request line is split on single spaces into exactly three tokens
///    (method, target, version); anything else fails.
/// 2. Header lines run until the blank line. At least one header is
///    required - a request without a header block is rejected. Names and
///    values are trimmed and split on the first `:`.
/// 3. A body is extracted only when `Content-Length` is present; the header
///    value is the slice end within the buffered body bytes, clamped to
///    what actually arrived.
///
/// The request constructor then decomposes the target into path and query
/// parameters under the given policy.
pub fn parse_http_request(buf: &[u8], policy: QueryPolicy) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::UnterminatedHeaders)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: exactly three tokens, single-space separated
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split(' ');

    let method_str = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let raw_target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    if parts.next().is_some() {
        return Err(ParseError::InvalidRequestLine);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = Headers::new();

    for line in lines {
        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim(), value.trim());
    }

    // A request with headers is required; a blank line straight after the
    // request line is rejected
    if headers.is_empty() {
        return Err(ParseError::MissingHeaders);
    }

    // Body, if any: Content-Length is a slice end, clamped to the buffer
    let body = match headers.get("Content-Length") {
        Some(value) => {
            let end = value
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)?;
            body_bytes[..end.min(body_bytes.len())].to_vec()
        }
        None => Vec::new(),
    };

    Request::new(method, raw_target, version, headers, body, policy)
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req, QueryPolicy::Reject).unwrap();

        assert_eq!(parsed.target, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    }
}
