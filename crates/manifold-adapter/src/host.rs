//! Bridge from adapted tools to host-framework tool handles.

use crate::adapter::ToolAdapter;
use async_trait::async_trait;
use manifold_protocol::{AdaptedTool, AdapterError};
use serde_json::Value;
use std::fmt;

/// Capability interface the host agent framework consumes.
///
/// One concrete implementation exists, [`BridgedTool`]; hosts bind
/// against the trait so the adapter stays swappable.
#[async_trait]
pub trait HostTool: Send + Sync + fmt::Debug {
    /// Sanitized, catalog-unique tool name.
    fn name(&self) -> &str;
    /// Tool description.
    fn description(&self) -> &str;
    /// Normalized JSON schema for the tool arguments.
    fn input_schema(&self) -> Value;
    /// Invoke the tool through the adapter dispatcher.
    async fn invoke(&self, arguments: Value) -> Result<Value, AdapterError>;
}

/// Host tool handle backed by one catalog entry.
#[derive(Clone)]
pub struct BridgedTool {
    tool: AdaptedTool,
    adapter: ToolAdapter,
}

impl BridgedTool {
    /// Wrap a catalog entry with a handle onto the shared adapter.
    pub(crate) fn new(tool: AdaptedTool, adapter: ToolAdapter) -> Self {
        Self { tool, adapter }
    }

    /// Invoke the tool and render the result as display text.
    ///
    /// Strings pass through verbatim; any other value is pretty-printed
    /// JSON. This is the shape hosts feed back into model transcripts.
    pub async fn invoke_as_text(&self, arguments: Value) -> Result<String, AdapterError> {
        let value = self.invoke(arguments).await?;
        Ok(render_text(&value))
    }
}

impl fmt::Debug for BridgedTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgedTool")
            .field("name", &self.tool.name)
            .finish()
    }
}

#[async_trait]
impl HostTool for BridgedTool {
    fn name(&self) -> &str {
        &self.tool.name
    }

    fn description(&self) -> &str {
        &self.tool.description
    }

    fn input_schema(&self) -> Value {
        self.tool.input_schema.clone()
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, AdapterError> {
        self.adapter.call_tool(&self.tool.name, arguments).await
    }
}

/// Render an invocation result for a text transcript.
fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
