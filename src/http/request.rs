use std::collections::HashMap;

use crate::http::headers::Headers;
use crate::http::parser::ParseError;

/// HTTP request methods accepted by the server.
///
/// Dispatch happens at the request-line level only: target resolution does
/// not differ between methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// OPTIONS - Describe communication options
    OPTIONS,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }
}

/// What to do with a query segment that does not contain exactly one `=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryPolicy {
    /// Fail the whole request with 400 Bad Request.
    #[default]
    Reject,
    /// Drop the malformed segment and keep the rest.
    Ignore,
}

/// Represents a parsed HTTP request from a client.
///
/// The target holds the path component only; any query string has already
/// been split off into `query`. Percent-decoding is not performed anywhere.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, POST, OPTIONS)
    pub method: Method,
    /// The request path (e.g., "/index.html"), never containing the query string
    pub target: String,
    /// Query parameters from the `?`-delimited suffix of the raw target
    pub query: HashMap<String, String>,
    /// HTTP version as received (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: Headers,
    /// Request body, possibly empty
    pub body: Vec<u8>,
}

impl Request {
    /// Builds a request from the parsed request-line tokens, decomposing the
    /// raw target into path and query parameters.
    pub fn new(
        method: Method,
        raw_target: &str,
        version: impl Into<String>,
        headers: Headers,
        body: Vec<u8>,
        policy: QueryPolicy,
    ) -> Result<Self, ParseError> {
        let (target, query) = split_target(raw_target, policy)?;

        Ok(Self {
            method,
            target,
            query,
            version: version.into(),
            headers,
            body,
        })
    }

    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }
}

/// Splits a raw request target into its path and query parameters.
///
/// The suffix after the first `?` is split on `&`, each segment on `=`.
/// A segment with zero or more than one `=` is malformed and handled per
/// the policy. An empty suffix yields no parameters.
fn split_target(
    raw: &str,
    policy: QueryPolicy,
) -> Result<(String, HashMap<String, String>), ParseError> {
    let Some((path, raw_query)) = raw.split_once('?') else {
        return Ok((raw.to_string(), HashMap::new()));
    };

    let mut query = HashMap::new();

    if raw_query.is_empty() {
        return Ok((path.to_string(), query));
    }

    for segment in raw_query.split('&') {
        let mut parts = segment.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                query.insert(key.to_string(), value.to_string());
            }
            _ => match policy {
                QueryPolicy::Reject => return Err(ParseError::InvalidQuery),
                QueryPolicy::Ignore => continue,
            },
        }
    }

    Ok((path.to_string(), query))
}
