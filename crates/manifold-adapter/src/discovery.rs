//! Concurrent tool discovery across configured sources.

use crate::client::SourceClient;
use futures_util::future::join_all;
use log::{debug, warn};
use manifold_protocol::{AdapterError, RawTool, SourceDescriptor};
use std::sync::Arc;

/// Outcome of one discovery pass.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Raw tools from every reachable source. Manifest order is
    /// preserved within a source; sources appear in configuration order.
    pub tools: Vec<RawTool>,
    /// Per-source discovery failures, recorded but non-fatal.
    pub failures: Vec<SourceFailure>,
}

/// A source that failed to produce a manifest.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    /// Configured source name.
    pub source: String,
    /// The recorded error, always [`AdapterError::SourceUnreachable`].
    pub error: AdapterError,
}

/// Query every source concurrently and merge the manifests.
///
/// The fan-out is a join over independent per-source futures: it settles
/// when every source has either answered or failed. A failing source is
/// skipped and recorded; discovery proceeds with the rest.
pub async fn discover_all(
    client: &dyn SourceClient,
    sources: &[Arc<SourceDescriptor>],
) -> DiscoveryReport {
    let queries = sources.iter().map(|source| async move {
        let outcome = client.discover(source).await;
        (source, outcome)
    });

    let mut report = DiscoveryReport::default();
    for (source, outcome) in join_all(queries).await {
        match outcome {
            Ok(tools) => {
                debug!(
                    "discovered {} tools (source={}, protocol={})",
                    tools.len(),
                    source.name,
                    source.kind()
                );
                report.tools.extend(tools);
            }
            Err(failure) => {
                warn!("skipping unreachable source (source={}): {failure}", source.name);
                report.failures.push(SourceFailure {
                    source: source.name.clone(),
                    error: AdapterError::SourceUnreachable {
                        source_name: source.name.clone(),
                        message: failure.to_string(),
                    },
                });
            }
        }
    }
    report
}
