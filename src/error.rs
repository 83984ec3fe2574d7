use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::contract::SolrConfigManager`] implementations and
/// the packaging helpers.
#[derive(Debug, Error)]
pub enum SolrConfigError {
    /// A directory upload was given something that is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The cluster is unknown to (or unreachable through) the store.
    #[error("solr cluster not found: {0}")]
    ClusterNotFound(String),

    #[error("not a zip archive: {}", .path.display())]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to walk configuration directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Opaque failure reported by a remote implementer.
    #[error("remote configuration store error: {0}")]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolrConfigError {
    pub fn remote<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolrConfigError::Remote(err.into())
    }

    /// Whether this error was raised before any data left the caller.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SolrConfigError::NotADirectory { .. }
                | SolrConfigError::InvalidArgument(_)
                | SolrConfigError::InvalidArchive { .. }
        )
    }
}
