//! Shared test support utilities
//!
//! Provides `RecordingSink`, an instrumented `LogSink` that records every hook
//! invocation into a shared `HookLog`, for use in unit and integration tests.

use crate::domain::LogEntry;
use crate::error::SinkError;
use crate::port::LogSink;
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered record of hook calls across several sinks, as `"<sink>:<hook>"`.
#[derive(Clone, Default, Debug)]
pub struct HookLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl HookLog {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, sink: &str, hook: &str) {
        self.calls.borrow_mut().push(format!("{sink}:{hook}"));
    }
}

/// Sink that buffers entries and records hook calls, optionally failing.
pub struct RecordingSink {
    name: String,
    hooks: HookLog,
    buffer: Vec<LogEntry>,
    fail_accept: bool,
    fail_flush: bool,
}

impl RecordingSink {
    pub fn new(name: impl Into<String>, hooks: HookLog) -> Self {
        Self {
            name: name.into(),
            hooks,
            buffer: Vec::new(),
            fail_accept: false,
            fail_flush: false,
        }
    }

    pub fn failing_accept(mut self) -> Self {
        self.fail_accept = true;
        self
    }

    pub fn failing_flush(mut self) -> Self {
        self.fail_flush = true;
        self
    }

    fn failure(&self, hook: &str) -> SinkError {
        SinkError::Hook {
            sink: self.name.clone(),
            reason: format!("mock {hook} failure"),
        }
    }
}

impl LogSink for RecordingSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        self.hooks.record(&self.name, "log");
        if self.fail_accept {
            return Err(self.failure("log"));
        }
        self.buffer.push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.hooks.record(&self.name, "save");
        if self.fail_flush {
            return Err(self.failure("save"));
        }
        Ok(())
    }

    fn buffer(&self) -> &[LogEntry] {
        &self.buffer
    }
}
