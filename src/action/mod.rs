//! What happens to a file once the filter lets it through.
//!
//! Exactly one [`Action`] is chosen per run. Listing writes the path to the
//! output sink; deleting removes the file and records it in the [`DeleteLog`].

mod delete_log;

pub use delete_log::{DeleteLog, DELETE_PREFIX, TIMESTAMP_FORMAT};

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, WalkDelError};
use crate::walker::EntryInfo;

/// Behaviour applied to every matching file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the path to the output sink
    List,
    /// Remove the file and log the deletion
    Delete,
}

impl Action {
    /// Delete wins when requested; listing is the default otherwise.
    pub fn from_config(config: &Config) -> Self {
        if config.delete {
            Action::Delete
        } else {
            Action::List
        }
    }
}

/// Applies the run's [`Action`] to matching entries.
pub struct Dispatcher<O: Write, L: Write> {
    action: Action,
    out: O,
    log: DeleteLog<L>,
}

impl<O: Write, L: Write> Dispatcher<O, L> {
    pub fn new(action: Action, out: O, log: L) -> Self {
        Self {
            action,
            out,
            log: DeleteLog::new(log),
        }
    }

    /// Apply the action to one entry that passed the filter.
    pub fn dispatch(&mut self, entry: &EntryInfo) -> Result<()> {
        match self.action {
            Action::List => list_file(entry.path(), &mut self.out),
            Action::Delete => delete_file(entry.path(), &mut self.log),
        }
    }

    /// Flush both sinks.
    pub fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(WalkDelError::Write)?;
        self.log.flush().map_err(WalkDelError::Write)
    }
}

/// Write `path` followed by a newline.
///
/// The path bytes are written untouched, so names that are not valid UTF-8
/// come out exactly as they are on disk.
pub fn list_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let mut line = path.as_os_str().as_encoded_bytes().to_vec();
    line.push(b'\n');
    out.write_all(&line).map_err(WalkDelError::Write)
}

/// Remove the file at `path`, then record it.
///
/// Nothing is logged when the removal fails.
pub fn delete_file<W: Write>(path: &Path, log: &mut DeleteLog<W>) -> Result<()> {
    fs::remove_file(path).map_err(|source| WalkDelError::Delete {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Deleted file");

    log.record(path).map_err(WalkDelError::Write)
}
