//! Error taxonomy for the adapter boundary.
//!
//! Discovery-time failures are partial: one bad source degrades the
//! catalog, never the whole pass. Invocation-time failures surface as a
//! single unified variant carrying a [`FailureKind`] tag, so callers
//! never handle protocol-specific error types.

use std::fmt;
use thiserror::Error;

/// Classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The transport timed out waiting for the source.
    Timeout,
    /// The source could not be reached at all.
    Connection,
    /// The source answered with something the transport could not parse.
    MalformedResponse,
    /// The source reported an application-level error.
    Remote,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::Connection => "connection",
            Self::MalformedResponse => "malformed response",
            Self::Remote => "remote",
        };
        f.write_str(name)
    }
}

/// Failure reported by the external tool-source library.
///
/// Protocol-specific detail survives only as the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportFailure {
    /// Failure classification.
    pub kind: FailureKind,
    /// Protocol-specific detail, flattened to text.
    pub message: String,
}

impl TransportFailure {
    /// Build a failure with an explicit kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Timeout failure.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    /// Connection failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Connection, message)
    }

    /// Malformed-response failure.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedResponse, message)
    }

    /// Remote application error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Remote, message)
    }
}

/// Errors returned by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A source failed discovery; the catalog proceeds without its tools.
    ///
    /// The field is `source_name` rather than `source` because thiserror
    /// reserves `source` for the error cause chain.
    #[error("source unreachable: {source_name}: {message}")]
    SourceUnreachable { source_name: String, message: String },
    /// A schema construct could not be converted faithfully.
    #[error("schema degraded for {tool}: {message}")]
    SchemaDegraded { tool: String, message: String },
    /// Lookup or call against an unknown adapted name.
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    /// The underlying transport reported a failure during a call.
    #[error("invocation failed ({kind}): {message}")]
    InvocationFailed { kind: FailureKind, message: String },
    /// Starting or stopping a source session failed.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),
    /// Source configuration could not be loaded or decoded.
    #[error("config error: {0}")]
    Config(String),
}

impl From<TransportFailure> for AdapterError {
    /// Unify a transport failure into the invocation error variant.
    fn from(failure: TransportFailure) -> Self {
        Self::InvocationFailed {
            kind: failure.kind,
            message: failure.message,
        }
    }
}
