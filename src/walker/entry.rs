use std::path::{Path, PathBuf};

/// Metadata for a single visited filesystem entry.
///
/// Produced per visit by [`super::walk`] and dropped once the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Path as reported to the output and log sinks
    pub path: PathBuf,

    /// True if this is a directory (symlinks are never directories here)
    pub is_dir: bool,

    /// Apparent size in bytes
    pub size: u64,
}

impl EntryInfo {
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
        }
    }

    #[cfg(test)]
    pub(crate) fn dir(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
