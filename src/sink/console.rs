use crate::domain::LogEntry;
use crate::error::SinkError;
use crate::port::LogSink;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Stdout, Write};

/// Line printed by the save hook. The console keeps nothing to persist.
pub const SAVE_NOTICE: &str = "Save Logs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// Same line layout the file sink persists.
    #[default]
    Plain,
    /// One JSON object per entry.
    Json,
}

/// Prints entries as they arrive. Never buffers.
pub struct ConsoleSink<W: Write = Stdout> {
    writer: W,
    format: ConsoleFormat,
}

impl ConsoleSink<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            format: ConsoleFormat::Plain,
        }
    }

    pub fn format(mut self, format: ConsoleFormat) -> Self {
        self.format = format;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn accept(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        let written = match self.format {
            ConsoleFormat::Plain => writeln!(self.writer, "{entry}"),
            ConsoleFormat::Json => {
                let line = serde_json::to_string(entry)?;
                writeln!(self.writer, "{line}")
            }
        };
        written.map_err(SinkError::Console)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        writeln!(self.writer, "{SAVE_NOTICE}")
            .and_then(|()| self.writer.flush())
            .map_err(SinkError::Console)
    }

    fn buffer(&self) -> &[LogEntry] {
        &[]
    }
}
