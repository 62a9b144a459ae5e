use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
///
/// Every variant is fatal to a run. Messages carry only what the failing
/// operation reported.
#[derive(Error, Debug)]
pub enum WalkDelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Traversal failed: entry inaccessible, metadata or listing unreadable.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("remove {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output or log sink rejected a write.
    #[error(transparent)]
    Write(std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("open log file '{}': {source}", path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WalkDelError>;
