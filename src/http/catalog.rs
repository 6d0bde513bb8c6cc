use std::path::PathBuf;

use anyhow::Context;

use crate::http::response::StatusCode;

/// Canned error bodies, one `<status>.html` file per supported status code.
///
/// Reason phrases live on [`StatusCode`]; this type owns the body half of
/// the catalog. Bodies are re-read from disk on every lookup; the catalog
/// holds no cache.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    dir: PathBuf,
}

impl ErrorCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads the canned body for `status`.
    ///
    /// A missing or unreadable body file is an operator configuration
    /// error: it surfaces as a fatal error and is never translated into
    /// another HTTP response.
    pub async fn body(&self, status: StatusCode) -> anyhow::Result<Vec<u8>> {
        let path = self.dir.join(format!("{}.html", status.as_u16()));

        tokio::fs::read(&path).await.with_context(|| {
            format!(
                "missing error body for status {}: {}",
                status.as_u16(),
                path.display()
            )
        })
    }
}
