//! FileSink: buffers entries and rewrites a text log file on every save.
//!
//! The file holds one rendered line per entry. A save reads the current file,
//! drops the oldest lines so the line count stays within the shared threshold,
//! appends a rendering of the entire buffer and rewrites the whole file.
//!
//! The buffer is never cleared, so each save re-renders everything accepted so
//! far; the drop arithmetic accounts for that by subtracting the full buffer
//! length rather than only new entries.
//!
//! The threshold is process-wide. `FileSink::with_max_lines` changes it for every
//! file sink, including ones created earlier.

use crate::domain::LogEntry;
use crate::error::SinkError;
use crate::port::LogSink;
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

pub const DEFAULT_MAX_LINES: u64 = 100;

static MAX_LINES: AtomicU64 = AtomicU64::new(DEFAULT_MAX_LINES);

/// Current line threshold shared by all file sinks.
pub fn max_lines() -> u64 {
    MAX_LINES.load(Ordering::Relaxed)
}

/// Replace the shared line threshold. Affects every file sink in the process.
pub fn set_max_lines(max_lines: u64) {
    MAX_LINES.store(max_lines, Ordering::Relaxed);
}

pub struct FileSink {
    path: PathBuf,
    buffer: Vec<LogEntry>,
}

impl FileSink {
    /// Create a sink writing to `path` under the current shared threshold.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: Vec::new(),
        }
    }

    /// Create a sink and set the shared threshold to `max_lines`.
    ///
    /// The new threshold applies to all file sinks, not only this one.
    pub fn with_max_lines(path: impl Into<PathBuf>, max_lines: u64) -> Self {
        set_max_lines(max_lines);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Result<Vec<String>, SinkError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SinkError::io(&self.path, e)),
        };

        // Decode lossily so a torn multi-byte character does not block rotation.
        let mut lines = Vec::new();
        for line in BufReader::new(file).split(b'\n') {
            let mut bytes = line.map_err(|e| SinkError::io(&self.path, e))?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            lines.push(String::from_utf8_lossy(&bytes).into_owned());
        }
        Ok(lines)
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| SinkError::io(parent, e))?;
        }

        let capacity = lines.iter().map(|line| line.len() + 1).sum();
        let mut contents = String::with_capacity(capacity);
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(|e| SinkError::io(&self.path, e))
    }
}

/// Number of lines to remove from the front of `existing` file lines followed
/// by `pending` freshly rendered entries, given `threshold`.
///
/// Computed as `(existing - threshold) + pending` once `existing + pending`
/// exceeds the threshold, zero otherwise.
pub fn drop_count(existing: usize, pending: usize, threshold: u64) -> usize {
    let existing = existing as i128;
    let pending = pending as i128;
    let threshold = threshold as i128;

    if existing + pending <= threshold {
        return 0;
    }
    let count = (existing - threshold) + pending;
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn accept(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        self.buffer.push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        let threshold = max_lines();
        let mut lines = self.read_existing()?;
        let existing = lines.len();
        let pending = self.buffer.len();

        lines.extend(self.buffer.iter().map(ToString::to_string));

        let dropped = drop_count(existing, pending, threshold).min(lines.len());
        if dropped > 0 {
            lines.drain(..dropped);
            info!(
                path = %self.path.display(),
                dropped,
                threshold,
                "Rotated log file, dropped oldest lines"
            );
        }
        if dropped > existing {
            debug!(
                skipped = dropped - existing,
                "buffer alone exceeds threshold, oldest entries not written"
            );
        }

        self.write_lines(&lines)?;
        debug!(path = %self.path.display(), lines = lines.len(), "log file written");
        Ok(())
    }

    fn buffer(&self) -> &[LogEntry] {
        &self.buffer
    }
}
