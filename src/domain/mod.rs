//! Domain layer for rask-log-chain.
//!
//! Contains the canonical types shared across all modules:
//! - `LogEntry`: One immutable log event
//! - `LogKind`: Error/Warning/Information classification
//! - `LogData`: Optional tagged payload attached to an entry

pub mod log_entry;

pub use log_entry::{ExceptionInfo, LogData, LogEntry, LogEntryBuilder, LogKind};
