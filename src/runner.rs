//! One walk → filter → act pass over a directory tree.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use humansize::{format_size, BINARY};

use crate::action::{Action, Dispatcher};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::walker::{filter_out, walk};

/// Counts gathered during a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries visited, directories included
    pub visited: u64,
    /// Entries skipped by the filter
    pub filtered: u64,
    /// Files written to the output sink
    pub listed: u64,
    /// Files removed from disk
    pub deleted: u64,
    /// Bytes freed by deletion
    pub freed_bytes: u64,
}

/// Walk `config.root`, listing matches to `out` or deleting them and
/// recording each deletion to `log`.
///
/// Stops at the first error. Whatever was written before the failure stays in
/// the sinks.
pub fn run<O: Write, L: Write>(config: &Config, out: O, log: L) -> Result<RunSummary> {
    config.validate()?;

    let action = Action::from_config(config);
    let mut dispatcher = Dispatcher::new(action, out, log);
    let mut summary = RunSummary::default();

    walk(&config.root, |entry| {
        summary.visited += 1;

        if filter_out(entry.path(), config.min_size, &config.extension, entry) {
            tracing::trace!(path = %entry.path().display(), "Filtered out");
            summary.filtered += 1;
            return Ok(());
        }

        dispatcher.dispatch(entry)?;

        match action {
            Action::List => summary.listed += 1,
            Action::Delete => {
                summary.deleted += 1;
                summary.freed_bytes += entry.size;
            }
        }
        Ok(())
    })?;

    dispatcher.finish()?;

    tracing::info!(
        visited = summary.visited,
        filtered = summary.filtered,
        listed = summary.listed,
        deleted = summary.deleted,
        freed = %format_size(summary.freed_bytes, BINARY),
        "Walk complete"
    );

    Ok(summary)
}

/// Run against the process streams.
///
/// Listed paths go to stdout. Deletion records are appended to the configured
/// log file, or go to stdout when none is set. A log file that cannot be
/// opened fails the run before anything is walked.
pub fn execute(config: &Config) -> Result<RunSummary> {
    let log: Box<dyn Write> = match config.log_file() {
        Some(path) => Box::new(open_log_file(path)?),
        None => Box::new(io::stdout()),
    };

    run(config, io::stdout(), log)
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> std::result::Result<File, ConfigError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogOpen {
            path: path.to_path_buf(),
            source,
        })
}
