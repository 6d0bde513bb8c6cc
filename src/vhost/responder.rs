//! Response building
//!
//! This module turns a parsed request (or the lack of one) into a complete
//! response, resolving targets against the virtual host and pulling error
//! pages from the catalog.

use anyhow::Result;

use crate::config::Config;
use crate::http::catalog::ErrorCatalog;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::vhost::resolver::{Resolved, Vhost};

/// Builds responses by resolving requests against the virtual host.
///
/// Holds the two process-wide pieces of configuration: the vhost root and
/// the error catalog directory. Both are set once at startup and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Responder {
    vhost: Vhost,
    catalog: ErrorCatalog,
}

impl Responder {
    pub fn new(vhost: Vhost, catalog: ErrorCatalog) -> Self {
        Self { vhost, catalog }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Vhost::new(cfg.vhost.root.clone()),
            ErrorCatalog::new(cfg.errors.dir.clone()),
        )
    }

    /// Produces the response for one exchange.
    ///
    /// With no request (the message failed to parse) the response comes
    /// straight from the error catalog for `fallback`, with no vhost
    /// access. Otherwise the target is resolved: a found file becomes a
    /// 200 with the file bytes as body, a missing one becomes the
    /// catalog's 404.
    ///
    /// Catalog faults are unrecoverable and propagate; they are never
    /// downgraded into another HTTP response.
    pub async fn build(
        &self,
        request: Option<&Request>,
        fallback: StatusCode,
    ) -> Result<Response> {
        let Some(request) = request else {
            return self.error_response(fallback).await;
        };

        match self.vhost.resolve(&request.target).await? {
            Resolved::Found(body) => {
                Ok(ResponseBuilder::new(StatusCode::Ok).body(body).build())
            }
            Resolved::NotFound => self.error_response(StatusCode::NotFound).await,
        }
    }

    /// Error response with reason phrase and canned body from the catalog.
    async fn error_response(&self, status: StatusCode) -> Result<Response> {
        let body = self.catalog.body(status).await?;
        Ok(ResponseBuilder::new(status).body(body).build())
    }
}
