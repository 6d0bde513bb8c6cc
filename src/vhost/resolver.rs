//! Target resolution against the virtual host root
//!
//! This module maps request targets to files on disk, including index-file
//! discovery for the root target.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// File names served when the target is `/`, in discovery order.
const INDEX_FILES: [&str; 2] = ["index.html", "index.php"];

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The target (or an index file, for `/`) was read successfully
    Found(Vec<u8>),
    /// No file exists for the target
    NotFound,
}

/// A filesystem-backed virtual host.
#[derive(Debug, Clone)]
pub struct Vhost {
    root: PathBuf,
}

impl Vhost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a target path and reads the file it names.
    ///
    /// `/` is served by index discovery; any other target maps to the root
    /// joined with the target minus its leading slash. Targets are used as
    /// received: no percent-decoding and no traversal sanitization.
    ///
    /// Filesystem faults other than not-found (permissions, a directory
    /// target) are server faults and propagate as errors.
    pub async fn resolve(&self, target: &str) -> anyhow::Result<Resolved> {
        let path = if target == "/" {
            match self.find_index().await? {
                Some(path) => path,
                None => return Ok(Resolved::NotFound),
            }
        } else {
            self.root.join(target.strip_prefix('/').unwrap_or(target))
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Resolved::Found(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Resolved::NotFound),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    /// Scans the root directory for an index file.
    ///
    /// Entry names are sorted before matching so discovery does not depend
    /// on the platform's directory listing order.
    async fn find_index(&self) -> anyhow::Result<Option<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("failed to list vhost root {}", self.root.display()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name());
        }
        names.sort();

        for name in names {
            if INDEX_FILES.iter().any(|candidate| name == *candidate) {
                return Ok(Some(self.root.join(name)));
            }
        }

        Ok(None)
    }
}
