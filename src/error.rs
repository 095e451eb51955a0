//! Catalog errors

use std::io;
use std::path::PathBuf;

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("post `{id}` has no `{field}` in its front-matter")]
    MissingField { id: String, field: &'static str },

    /// Raised by the markdown renderer, passed through as-is
    #[error(transparent)]
    Render(anyhow::Error),

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying I/O error is `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
