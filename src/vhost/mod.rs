//! Virtual host functionality
//!
//! This module resolves request targets against a filesystem-backed
//! virtual host and builds the responses: file resolution, index
//! discovery, and the 200/404/error-catalog branching.

pub mod resolver;
pub mod responder;

pub use resolver::{Resolved, Vhost};
pub use responder::Responder;
