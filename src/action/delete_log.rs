use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::path::Path;

/// Label that opens every deletion record
pub const DELETE_PREFIX: &str = "delete file: ";

/// Local date-time stamp written after the prefix
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Append-only record of deleted files.
///
/// Each successful deletion becomes one line:
/// `delete file: 2024/01/31 17:04:05 path/to/file`.
pub struct DeleteLog<W: Write> {
    sink: W,
}

impl<W: Write> DeleteLog<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Record a deletion stamped with the current local time.
    pub fn record(&mut self, path: &Path) -> io::Result<()> {
        self.record_at(path, Local::now())
    }

    /// Record a deletion with an explicit timestamp.
    ///
    /// The path is appended as raw bytes, never lossily re-encoded.
    pub fn record_at(&mut self, path: &Path, at: DateTime<Local>) -> io::Result<()> {
        let mut line = format!("{}{} ", DELETE_PREFIX, at.format(TIMESTAMP_FORMAT)).into_bytes();
        line.extend_from_slice(path.as_os_str().as_encoded_bytes());
        line.push(b'\n');
        self.sink.write_all(&line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.sink
    }
}
