//! Unified error types surfaced by the runtime API.
//!
//! [`SourceError`] covers collaborator failures for a single tick; the worker
//! logs and skips them. [`RuntimeError`] covers failures of the runtime itself
//! (configuration, channels, worker lifecycle, scenario files).
use std::path::PathBuf;

use engine_core::{CalcError, ErrorSeverity};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// An external collaborator failed for this tick.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{source_name} did not answer within {timeout_ms} ms")]
    Timeout {
        source_name: &'static str,
        timeout_ms: u64,
    },

    #[error("{source_name} transport failed: {message}")]
    Transport {
        source_name: &'static str,
        message: String,
    },

    #[error("{source_name} returned a malformed {endpoint} payload")]
    Malformed {
        source_name: &'static str,
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CalcError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Transient
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "SOURCE_TIMEOUT",
            Self::Transport { .. } => "SOURCE_TRANSPORT",
            Self::Malformed { .. } => "SOURCE_MALFORMED",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime command channel closed")]
    CommandChannelClosed,

    #[error("runtime command queue is full")]
    CommandQueueFull,

    #[error("tick worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a {0} before building")]
    MissingComponent(&'static str),

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read scenario {path}")]
    ScenarioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {path}")]
    ScenarioParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}
