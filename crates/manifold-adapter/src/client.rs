//! Seam to the external tool-source library.
//!
//! Concrete transport clients (HTTP, SSE, CLI process spawning, GraphQL,
//! MCP, sockets, text manifests) live outside the adapter core and are
//! consumed through this trait. Implementations own wire formats and
//! timeout policy; the adapter never inspects protocol detail.

use async_trait::async_trait;
use manifold_protocol::{RawTool, SourceDescriptor, TransportFailure};
use serde_json::Value;
use std::sync::Arc;

/// Opaque handle for a live source session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle {
    /// Index of the source in the configured descriptor set.
    pub source_index: usize,
    /// Client-assigned session identifier.
    pub id: u64,
}

/// Transport client contract consumed from the tool-source library.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Fetch the raw tool manifest for a source, preserving manifest order.
    async fn discover(
        &self,
        source: &Arc<SourceDescriptor>,
    ) -> Result<Vec<RawTool>, TransportFailure>;

    /// Invoke a tool by its raw, source-local name.
    async fn invoke(
        &self,
        source: &SourceDescriptor,
        raw_name: &str,
        arguments: Value,
    ) -> Result<Value, TransportFailure>;

    /// Open a persistent session for a source that needs one.
    ///
    /// Clients whose protocols are all request-scoped can rely on the
    /// default no-op handle.
    async fn open_session(
        &self,
        _source: &SourceDescriptor,
        source_index: usize,
    ) -> Result<SessionHandle, TransportFailure> {
        Ok(SessionHandle {
            source_index,
            id: 0,
        })
    }

    /// Release a previously opened session.
    async fn close_session(&self, _handle: SessionHandle) -> Result<(), TransportFailure> {
        Ok(())
    }
}
