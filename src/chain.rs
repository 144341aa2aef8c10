//! Ordered dispatch of `log` and `save` calls through a fixed list of sinks.
//!
//! Each call runs the local hook of sink 0, then sink 1, and so on. The first
//! hook that fails stops propagation: sinks after it are not invoked and the
//! failure is returned to the caller.

use crate::domain::LogEntry;
use crate::error::{ChainError, SinkError};
use crate::port::LogSink;
use tracing::{debug, trace, warn};

/// Immutable, ordered sequence of sinks.
///
/// Not synchronised. Callers sharing a chain across threads must serialise
/// `log` and `save` themselves.
pub struct LogChain {
    sinks: Vec<Box<dyn LogSink>>,
}

impl LogChain {
    pub fn new(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { sinks }
    }

    pub fn builder() -> LogChainBuilder {
        LogChainBuilder::default()
    }

    /// Run every sink's log hook in order.
    pub fn log(&mut self, entry: LogEntry) -> Result<(), ChainError> {
        trace!(kind = %entry.kind(), severity = entry.severity(), "dispatching log entry");
        self.propagate("log", |sink| sink.accept(&entry))
    }

    /// Run every sink's save hook in order.
    pub fn save(&mut self) -> Result<(), ChainError> {
        debug!(sinks = self.sinks.len(), "saving log chain");
        self.propagate("save", |sink| sink.flush())
    }

    fn propagate<F>(&mut self, operation: &'static str, mut hook: F) -> Result<(), ChainError>
    where
        F: FnMut(&mut dyn LogSink) -> Result<(), SinkError>,
    {
        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(source) = hook(sink.as_mut()) {
                warn!(
                    index,
                    sink = sink.name(),
                    operation,
                    error = %source,
                    "sink hook failed, chain aborted"
                );
                return Err(ChainError::SinkFailed {
                    index,
                    sink: sink.name().to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn sink(&self, index: usize) -> Option<&dyn LogSink> {
        self.sinks.get(index).map(|sink| sink.as_ref())
    }

    pub fn sinks(&self) -> impl Iterator<Item = &dyn LogSink> {
        self.sinks.iter().map(|sink| sink.as_ref())
    }
}

impl std::fmt::Debug for LogChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sinks.iter().map(|sink| sink.name()))
            .finish()
    }
}

/// Collects sinks in chain order. The chain cannot change once built.
#[derive(Default)]
pub struct LogChainBuilder {
    sinks: Vec<Box<dyn LogSink>>,
}

impl LogChainBuilder {
    /// Append a sink after the ones already added.
    pub fn sink<S: LogSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn build(self) -> LogChain {
        LogChain::new(self.sinks)
    }
}
