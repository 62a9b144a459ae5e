use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Resolved configuration for a single run.
///
/// Built once at startup and never mutated afterwards. The deletion log sink
/// is not part of the configuration; it is handed to [`crate::runner::run`]
/// alongside the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Traversal root
    pub root: PathBuf,
    /// Required extension including the leading dot (empty = no filter)
    pub extension: String,
    /// Minimum file size in bytes; smaller files are skipped
    pub min_size: u64,
    /// List matching files (also the behaviour when `delete` is unset)
    pub list: bool,
    /// Delete matching files instead of listing them
    pub delete: bool,
    /// Append deletion records to this file instead of stdout
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: String::new(),
            min_size: 0,
            list: false,
            delete: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Create a configuration rooted at `root` with every filter disabled
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the required extension, e.g. `".log"`
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Set the minimum file size in bytes
    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the list flag
    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Set the delete flag
    pub fn with_delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    /// Set the deletion log file
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Log file, if one is configured
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Reject configurations that cannot produce a meaningful run.
    ///
    /// Suspicious but legal settings are reported through `tracing` instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("root must not be empty".into()));
        }

        if !self.extension.is_empty() && !self.extension.starts_with('.') {
            tracing::warn!(
                extension = %self.extension,
                "Extension filter has no leading '.', no file will match"
            );
        }

        if self.list && self.delete {
            tracing::warn!("Both list and delete requested, files will be deleted");
        }

        Ok(())
    }
}
