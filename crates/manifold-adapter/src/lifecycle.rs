//! Session lifecycle for configured sources.

use crate::client::{SessionHandle, SourceClient};
use log::{debug, error, warn};
use manifold_protocol::{AdapterError, SourceDescriptor};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct SessionState {
    started: bool,
    /// Open sessions keyed by source index. Source names are not
    /// guaranteed unique, indices are.
    sessions: HashMap<usize, SessionHandle>,
}

/// Owns connection and session state for every configured source.
///
/// `start` and `stop` form a scoped acquire/release pair: `stop` is
/// best-effort and releases whatever `start` managed to open, even
/// after a partial failure.
pub struct SessionManager {
    client: Arc<dyn SourceClient>,
    sources: Vec<Arc<SourceDescriptor>>,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Create a manager for the given descriptor set.
    pub fn new(client: Arc<dyn SourceClient>, sources: Vec<Arc<SourceDescriptor>>) -> Self {
        Self {
            client,
            sources,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Open a session for every source that holds persistent state.
    ///
    /// Idempotent: a second call while started is a no-op. A per-source
    /// open failure is recorded and reported after all sources have been
    /// attempted; successfully opened sessions are retained so a later
    /// `stop` can release them.
    pub async fn start(&self) -> Result<(), AdapterError> {
        let mut state = self.state.lock().await;
        if state.started {
            debug!("session manager already started");
            return Ok(());
        }

        let mut failures = Vec::new();
        for (index, source) in self.sources.iter().enumerate() {
            if !source.kind().requires_session() || state.sessions.contains_key(&index) {
                continue;
            }
            match self.client.open_session(source, index).await {
                Ok(handle) => {
                    debug!(
                        "opened session (source={}, protocol={})",
                        source.name,
                        source.kind()
                    );
                    state.sessions.insert(index, handle);
                }
                Err(failure) => {
                    error!("failed to open session (source={}): {failure}", source.name);
                    failures.push(format!("{}: {failure}", source.name));
                }
            }
        }

        if failures.is_empty() {
            state.started = true;
            Ok(())
        } else {
            Err(AdapterError::Lifecycle(format!(
                "session start incomplete: {}",
                failures.join("; ")
            )))
        }
    }

    /// Release every open session.
    ///
    /// Best-effort: every session is attempted regardless of earlier
    /// close failures, which are collected into a single error.
    pub async fn stop(&self) -> Result<(), AdapterError> {
        let mut state = self.state.lock().await;
        let mut failures = Vec::new();
        for (index, handle) in state.sessions.drain() {
            let source_name = self
                .sources
                .get(index)
                .map_or("unknown", |source| source.name.as_str());
            if let Err(failure) = self.client.close_session(handle).await {
                warn!("failed to close session (source={source_name}): {failure}");
                failures.push(format!("{source_name}: {failure}"));
            } else {
                debug!("closed session (source={source_name})");
            }
        }
        state.started = false;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AdapterError::Lifecycle(format!(
                "session stop incomplete: {}",
                failures.join("; ")
            )))
        }
    }

    /// Whether `start` has completed successfully.
    pub async fn is_started(&self) -> bool {
        self.state.lock().await.started
    }

    /// Number of currently open sessions.
    pub async fn open_sessions(&self) -> usize {
        self.state.lock().await.sessions.len()
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("sources", &self.sources.len())
            .finish()
    }
}
