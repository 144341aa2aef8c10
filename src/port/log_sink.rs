//! LogSink trait: one link of a [`LogChain`](crate::chain::LogChain).
//!
//! A sink only implements its local hooks. Forwarding to the next sink is the
//! chain's job, so implementations never see their neighbours.

use crate::codec;
use crate::domain::LogEntry;
use crate::error::SinkError;
use bytes::Bytes;

/// Destination for log entries (console, file, ...).
///
/// Sinks are driven from a single thread; nothing here synchronises access to
/// the buffer.
pub trait LogSink {
    /// Short identifier used in diagnostics and chain errors.
    fn name(&self) -> &str;

    /// Local log hook. Runs before the entry is passed further down the chain.
    fn accept(&mut self, entry: &LogEntry) -> Result<(), SinkError>;

    /// Local save hook. Runs before the save request is passed further down the chain.
    fn flush(&mut self) -> Result<(), SinkError>;

    /// Every entry this sink has kept since it was created.
    fn buffer(&self) -> &[LogEntry];

    /// Binary frames of the whole buffer, for out-of-band transmission.
    fn serialize_logs(&self) -> Bytes {
        codec::encode_buffer(self.buffer())
    }
}
