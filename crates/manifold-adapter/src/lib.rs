//! Manifold tool adapter.
//!
//! Aggregates tool manifests from independently addressable sources
//! (HTTP, SSE, streamable HTTP, CLI, GraphQL, MCP, TCP, UDP, text
//! manifests), normalizes their names and schemas into one catalog, and
//! dispatches uniform calls back to the owning transport with a single
//! error taxonomy. Concrete transport clients are supplied externally
//! through the [`SourceClient`] seam.

pub mod adapter;
pub mod catalog;
pub mod client;
pub mod config;
pub mod discovery;
pub mod host;
pub mod lifecycle;
pub mod sanitize;
pub mod schema;

/// Adapter facade: lifecycle, catalog access, and dispatch.
pub use adapter::ToolAdapter;
/// Catalog type and the per-pass catalog builder.
pub use catalog::{ToolCatalog, build_catalog};
/// Seam to the external tool-source library.
pub use client::{SessionHandle, SourceClient};
/// Source configuration loading.
pub use config::{SourcesConfig, load_sources_file, sources_from_value};
/// Discovery fan-out and its report types.
pub use discovery::{DiscoveryReport, SourceFailure, discover_all};
/// Host-framework tool bridge.
pub use host::{BridgedTool, HostTool};
/// Session lifecycle manager.
pub use lifecycle::SessionManager;
/// Name sanitization.
pub use sanitize::{MAX_NAME_LEN, NameSanitizer, sanitize_name};
/// Schema normalization.
pub use schema::{Normalized, normalize};

/// Re-export of the shared data model for consumers.
pub use manifold_protocol as protocol;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still
/// expected to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
