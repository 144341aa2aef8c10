use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Timestamp layout used by the human-readable line format.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y_%H:%M:%S:%3f";

/// General classification of a log entry.
///
/// The discriminants are the numeric codes written into binary frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogKind {
    Error = 0,
    Warning = 1,
    Information = 2,
}

impl LogKind {
    /// Numeric code written as the first byte of a frame.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LogKind::Error => "Error",
            LogKind::Warning => "Warning",
            LogKind::Information => "Information",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exception-like payload: a failure message and the component it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceptionInfo {
    pub message: String,
    pub source: Option<String>,
}

impl ExceptionInfo {
    pub fn new(message: impl Into<String>, source: Option<String>) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// Capture an error's display text, tagging it with the component that raised it.
    pub fn from_error(error: &dyn std::error::Error, source: Option<&str>) -> Self {
        Self {
            message: error.to_string(),
            source: source.map(str::to_string),
        }
    }
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{source}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Optional payload attached to a [`LogEntry`].
///
/// Each variant maps to exactly one tag byte in the binary frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LogData {
    Text(String),
    Integer(i64),
    Float(f64),
    Exception(ExceptionInfo),
    /// Any other value, captured through its string representation.
    Opaque(String),
}

impl LogData {
    pub fn opaque(value: &impl fmt::Display) -> Self {
        LogData::Opaque(value.to_string())
    }
}

impl fmt::Display for LogData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogData::Text(text) | LogData::Opaque(text) => f.write_str(text),
            LogData::Integer(value) => write!(f, "{value}"),
            LogData::Float(value) => write!(f, "{value}"),
            LogData::Exception(exception) => write!(f, "{exception}"),
        }
    }
}

impl From<&str> for LogData {
    fn from(value: &str) -> Self {
        LogData::Text(value.to_string())
    }
}

impl From<String> for LogData {
    fn from(value: String) -> Self {
        LogData::Text(value)
    }
}

impl From<u8> for LogData {
    fn from(value: u8) -> Self {
        LogData::Integer(value as i64)
    }
}

impl From<i32> for LogData {
    fn from(value: i32) -> Self {
        LogData::Integer(value as i64)
    }
}

impl From<i64> for LogData {
    fn from(value: i64) -> Self {
        LogData::Integer(value)
    }
}

impl From<f64> for LogData {
    fn from(value: f64) -> Self {
        LogData::Float(value)
    }
}

impl From<ExceptionInfo> for LogData {
    fn from(value: ExceptionInfo) -> Self {
        LogData::Exception(value)
    }
}

/// A single log event. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    kind: LogKind,
    severity: i32,
    message: String,
    timestamp: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<LogData>,
}

impl LogEntry {
    /// Entry with severity 0 and no payload, stamped with the current local time.
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self::builder(kind, message).build()
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogKind::Warning, message)
    }

    pub fn information(message: impl Into<String>) -> Self {
        Self::new(LogKind::Information, message)
    }

    pub fn builder(kind: LogKind, message: impl Into<String>) -> LogEntryBuilder {
        LogEntryBuilder {
            kind,
            severity: 0,
            message: message.into(),
            timestamp: None,
            data: None,
        }
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    /// Higher is more severe. Not range-checked.
    pub fn severity(&self) -> i32 {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn data(&self) -> Option<&LogData> {
        self.data.as_ref()
    }
}

/// Renders `"{kind} {severity} {message} {timestamp} | {data}"`, the line format
/// persisted by the file sink. Absent data renders as an empty string.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} | ",
            self.kind,
            self.severity,
            self.message,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )?;
        match &self.data {
            Some(data) => write!(f, "{data}"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntryBuilder {
    kind: LogKind,
    severity: i32,
    message: String,
    timestamp: Option<DateTime<Local>>,
    data: Option<LogData>,
}

impl LogEntryBuilder {
    pub fn severity(mut self, severity: i32) -> Self {
        self.severity = severity;
        self
    }

    pub fn data(mut self, data: impl Into<LogData>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Override the creation time. Defaults to `Local::now()` at `build()`.
    pub fn timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn build(self) -> LogEntry {
        LogEntry {
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            timestamp: self.timestamp.unwrap_or_else(Local::now),
            data: self.data,
        }
    }
}
