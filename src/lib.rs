#![warn(rust_2018_idioms)]

//! Chained log sinks with a compact binary framing format.
//!
//! A [`LogChain`] passes every entry and every save request through an ordered
//! list of [`LogSink`]s. Each sink decides on its own what accepting and saving
//! mean: [`ConsoleSink`] prints immediately, [`FileSink`] buffers and rewrites a
//! bounded text file. Any sink's buffer can be framed with [`codec::encode_buffer`].
//!
//! Everything here is synchronous and single-threaded.

pub mod chain;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod sink;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use chain::{LogChain, LogChainBuilder};
pub use config::Config;
pub use domain::{ExceptionInfo, LogData, LogEntry, LogKind};
pub use error::{ChainError, ConfigError, SinkError};
pub use port::LogSink;
pub use sink::{ConsoleFormat, ConsoleSink, FileSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
