use std::path::PathBuf;
use thiserror::Error;

/// Failure raised by a single sink's log or save hook.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to access log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console write failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sink '{sink}' failed: {reason}")]
    Hook { sink: String, reason: String },
}

impl SinkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SinkError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A chain propagation aborted at the sink at `index`; later sinks were not called.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Sink #{index} ({sink}) aborted the chain: {source}")]
    SinkFailed {
        index: usize,
        sink: String,
        #[source]
        source: SinkError,
    },
}

impl ChainError {
    pub fn index(&self) -> usize {
        match self {
            ChainError::SinkFailed { index, .. } => *index,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
