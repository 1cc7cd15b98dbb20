//! Mock source client shared by the adapter integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use manifold_adapter::{SessionHandle, SourceClient};
use manifold_protocol::{RawTool, SourceDescriptor, Transport, TransportFailure};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// One recorded invocation: source name, raw tool name, arguments.
pub type RecordedCall = (String, String, Value);

/// Scripted in-memory stand-in for the external tool-source library.
#[derive(Default)]
pub struct StaticClient {
    manifests: Mutex<HashMap<String, Vec<(String, String, Value)>>>,
    unreachable: HashSet<String>,
    open_failures: HashSet<String>,
    invoke_failure: Mutex<Option<TransportFailure>>,
    pub open_attempts: AtomicUsize,
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    next_session_id: AtomicU64,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StaticClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a batch of tools with a default object schema.
    pub fn with_tools(self, source: &str, tools: &[(&str, &str)]) -> Self {
        for (name, description) in tools {
            self.add_tool(source, name, description);
        }
        self
    }

    /// Script a single tool with an explicit schema.
    pub fn with_tool(self, source: &str, name: &str, description: &str, schema: Value) -> Self {
        self.manifests.lock().entry(source.to_string()).or_default().push((
            name.to_string(),
            description.to_string(),
            schema,
        ));
        self
    }

    /// Mark a source as failing discovery outright.
    pub fn with_unreachable(mut self, source: &str) -> Self {
        self.unreachable.insert(source.to_string());
        self
    }

    /// Mark a source whose session open fails.
    pub fn with_open_failure(mut self, source: &str) -> Self {
        self.open_failures.insert(source.to_string());
        self
    }

    /// Script every invocation to fail with the given transport failure.
    pub fn with_invoke_failure(self, failure: TransportFailure) -> Self {
        *self.invoke_failure.lock() = Some(failure);
        self
    }

    /// Add a tool after construction, for rediscovery tests.
    pub fn add_tool(&self, source: &str, name: &str, description: &str) {
        self.manifests.lock().entry(source.to_string()).or_default().push((
            name.to_string(),
            description.to_string(),
            json!({ "type": "object", "properties": {} }),
        ));
    }

    /// Invocations recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SourceClient for StaticClient {
    async fn discover(
        &self,
        source: &Arc<SourceDescriptor>,
    ) -> Result<Vec<RawTool>, TransportFailure> {
        if self.unreachable.contains(&source.name) {
            return Err(TransportFailure::connection("connection refused"));
        }
        let manifests = self.manifests.lock();
        let tools = manifests
            .get(&source.name)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(name, description, schema)| RawTool {
                        name: name.clone(),
                        description: description.clone(),
                        input_schema: schema.clone(),
                        output_schema: None,
                        source: source.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(tools)
    }

    async fn invoke(
        &self,
        source: &SourceDescriptor,
        raw_name: &str,
        arguments: Value,
    ) -> Result<Value, TransportFailure> {
        self.calls.lock().push((
            source.name.clone(),
            raw_name.to_string(),
            arguments.clone(),
        ));
        if let Some(failure) = self.invoke_failure.lock().clone() {
            return Err(failure);
        }
        Ok(json!({ "called": raw_name, "with": arguments }))
    }

    async fn open_session(
        &self,
        source: &SourceDescriptor,
        source_index: usize,
    ) -> Result<SessionHandle, TransportFailure> {
        self.open_attempts.fetch_add(1, Ordering::SeqCst);
        if self.open_failures.contains(&source.name) {
            return Err(TransportFailure::connection("session refused"));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(SessionHandle {
            source_index,
            id: self.next_session_id.fetch_add(1, Ordering::SeqCst),
        })
    }

    async fn close_session(&self, _handle: SessionHandle) -> Result<(), TransportFailure> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// HTTP source descriptor fixture.
pub fn http_source(name: &str) -> SourceDescriptor {
    SourceDescriptor {
        name: name.to_string(),
        transport: Transport::Http {
            url: format!("https://{name}.example.com/tools"),
            http_method: "GET".to_string(),
            content_type: "application/json".to_string(),
        },
    }
}

/// TCP source descriptor fixture (session-holding protocol).
pub fn tcp_source(name: &str) -> SourceDescriptor {
    SourceDescriptor {
        name: name.to_string(),
        transport: Transport::Tcp {
            host: "127.0.0.1".to_string(),
            port: 9000,
        },
    }
}
