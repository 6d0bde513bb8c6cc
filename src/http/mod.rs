//! HTTP protocol implementation.
//!
//! This module implements the message model and the parsing/serialization
//! layer: an untrusted byte buffer in, a validated request out, and a
//! response record back into bytes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler driving one request-response exchange
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`headers`**: The header container shared by requests and responses
//! - **`request`**: HTTP request representation and target decomposition
//! - **`response`**: HTTP response representation with builder pattern
//! - **`catalog`**: Canned reason phrases and error bodies per status code
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer until the \r\n\r\n terminator
//!        └──────┬──────┘
//!               │ Message buffered (or truncated)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve against the vhost
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (one exchange per connection)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hearth::http::catalog::ErrorCatalog;
//! use hearth::http::connection::Connection;
//! use hearth::http::request::QueryPolicy;
//! use hearth::vhost::{Responder, Vhost};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let responder = Responder::new(Vhost::new("static"), ErrorCatalog::new("static/stat"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, responder.clone(), QueryPolicy::Reject);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod connection;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
