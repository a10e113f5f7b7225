use std::io;
use std::path::PathBuf;

/// Errors raised while acquiring a catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON.
    #[error("malformed document {label}: {message}")]
    MalformedDocument { label: String, message: String },
}

/// Convenience alias used throughout the load crate.
pub type LoadResult<T> = Result<T, LoadError>;
