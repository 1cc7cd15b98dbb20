//! Adapter facade: lifecycle, catalog access, and invocation dispatch.

use crate::catalog::{ToolCatalog, build_catalog};
use crate::client::SourceClient;
use crate::discovery::{SourceFailure, discover_all};
use crate::host::{BridgedTool, HostTool};
use crate::lifecycle::SessionManager;
use log::{debug, info, warn};
use manifold_protocol::{AdaptedTool, AdapterError, SourceDescriptor};
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Aggregates tool manifests from configured sources into one catalog
/// and dispatches uniform calls back to the owning transport.
///
/// Cheap to clone; clones share catalog and session state.
#[derive(Clone)]
pub struct ToolAdapter {
    inner: Arc<AdapterInner>,
}

struct AdapterInner {
    client: Arc<dyn SourceClient>,
    sources: Vec<Arc<SourceDescriptor>>,
    sessions: SessionManager,
    /// Current catalog; swapped wholesale on every discovery pass so
    /// readers never observe a partial rebuild.
    catalog: RwLock<Arc<ToolCatalog>>,
    /// Source failures recorded by the most recent discovery pass.
    failures: RwLock<Vec<SourceFailure>>,
}

impl ToolAdapter {
    /// Create an adapter over a descriptor set and a source client.
    pub fn new(sources: Vec<SourceDescriptor>, client: Arc<dyn SourceClient>) -> Self {
        let sources: Vec<Arc<SourceDescriptor>> = sources.into_iter().map(Arc::new).collect();
        let sessions = SessionManager::new(client.clone(), sources.clone());
        Self {
            inner: Arc::new(AdapterInner {
                client,
                sources,
                sessions,
                catalog: RwLock::new(Arc::new(ToolCatalog::new())),
                failures: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Open source sessions and run the initial discovery pass.
    ///
    /// Idempotent: calling `start` while started is a no-op. Discovery
    /// failures degrade the catalog and are recorded, they do not fail
    /// the start; session-open failures do.
    pub async fn start(&self) -> Result<(), AdapterError> {
        if self.inner.sessions.is_started().await {
            debug!("adapter already started");
            return Ok(());
        }
        self.inner.sessions.start().await?;
        self.rediscover().await;
        info!(
            "adapter started with {} tools from {} sources",
            self.catalog().len(),
            self.inner.sources.len()
        );
        Ok(())
    }

    /// Release all sessions and drop the catalog.
    ///
    /// Best-effort: every session is attempted even when `start` only
    /// partially succeeded or earlier closes fail.
    pub async fn stop(&self) -> Result<(), AdapterError> {
        let result = self.inner.sessions.stop().await;
        *self.inner.catalog.write() = Arc::new(ToolCatalog::new());
        self.inner.failures.write().clear();
        info!("adapter stopped");
        result
    }

    /// Run a closure with the adapter started, stopping it on every
    /// exit path.
    ///
    /// The closure's error wins over a stop failure; a stop failure
    /// after a successful closure is reported.
    ///
    /// The stop runs when this future is polled to completion. If it is
    /// dropped mid-closure (a select arm or an outer timeout), sessions
    /// stay open until the caller invokes [`ToolAdapter::stop`].
    pub async fn with_started<T, F, Fut>(&self, f: F) -> Result<T, AdapterError>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Result<T, AdapterError>>,
    {
        self.start().await?;
        let result = f(self.clone()).await;
        let stopped = self.stop().await;
        match result {
            Ok(value) => stopped.map(|()| value),
            Err(err) => Err(err),
        }
    }

    /// Re-run discovery over all sources and swap the catalog atomically.
    pub async fn rediscover(&self) {
        let report = discover_all(self.inner.client.as_ref(), &self.inner.sources).await;
        let (catalog, degradations) = build_catalog(report.tools);
        for degradation in &degradations {
            warn!("{degradation}");
        }
        *self.inner.catalog.write() = Arc::new(catalog);
        *self.inner.failures.write() = report.failures;
    }

    /// All adapted tools in stable insertion order.
    pub fn list_tools(&self) -> Vec<AdaptedTool> {
        self.catalog().list().cloned().collect()
    }

    /// Fetch an adapted tool by name.
    pub fn get_tool(&self, name: &str) -> Option<AdaptedTool> {
        self.catalog().get(name).cloned()
    }

    /// Ranked search over adapted names and descriptions.
    pub fn search_tools(&self, query: &str, max_results: usize) -> Vec<AdaptedTool> {
        self.catalog()
            .search(query, max_results)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Source failures recorded by the most recent discovery pass.
    pub fn discovery_failures(&self) -> Vec<SourceFailure> {
        self.inner.failures.read().clone()
    }

    /// Invoke an adapted tool by name.
    ///
    /// Arguments are forwarded as-is; validating them against the
    /// normalized schema is the caller's responsibility. Transport
    /// failures of any protocol surface as
    /// [`AdapterError::InvocationFailed`] with a kind tag.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, AdapterError> {
        if !self.inner.sessions.is_started().await {
            return Err(AdapterError::Lifecycle("adapter is not started".to_string()));
        }
        let (raw_name, source) = {
            let catalog = self.catalog();
            let tool = catalog
                .get(name)
                .ok_or_else(|| AdapterError::ToolNotFound(name.to_string()))?;
            (tool.raw.name.clone(), tool.raw.source.clone())
        };
        debug!(
            "dispatching call (tool={name}, raw={raw_name}, source={}, protocol={})",
            source.name,
            source.kind()
        );
        self.inner
            .client
            .invoke(&source, &raw_name, arguments)
            .await
            .map_err(|failure| {
                warn!("invocation failed (tool={name}): {failure}");
                AdapterError::from(failure)
            })
    }

    /// Wrap every catalog entry as a host-framework tool handle whose
    /// callable forwards to [`ToolAdapter::call_tool`].
    pub fn to_host_tools(&self) -> Vec<Arc<dyn HostTool>> {
        self.catalog()
            .list()
            .map(|tool| {
                Arc::new(BridgedTool::new(tool.clone(), self.clone())) as Arc<dyn HostTool>
            })
            .collect()
    }

    /// Whether the adapter is currently started.
    pub async fn is_started(&self) -> bool {
        self.inner.sessions.is_started().await
    }

    /// Number of currently open source sessions.
    pub async fn open_sessions(&self) -> usize {
        self.inner.sessions.open_sessions().await
    }

    fn catalog(&self) -> Arc<ToolCatalog> {
        self.inner.catalog.read().clone()
    }
}

impl fmt::Debug for ToolAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolAdapter")
            .field("sources", &self.inner.sources.len())
            .field("tools", &self.catalog().len())
            .finish()
    }
}
