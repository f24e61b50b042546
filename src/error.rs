use crate::model::BuildError;
use thiserror::Error;

/// Error type for gtf2tracks operations.
#[derive(Debug, Error)]
pub enum Gtf2TracksError {
    /// Input extension is missing or not supported.
    #[error("unsupported input extension: {0} (expected .gtf or .gtf.gz)")]
    UnsupportedExtension(String),
    /// A line failed to parse or referenced an undeclared parent.
    #[error("line {line}: {source}")]
    Record { line: usize, source: BuildError },
    /// Failed to build a Rayon thread pool.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gtf2tracks operations.
pub type Result<T> = std::result::Result<T, Gtf2TracksError>;
