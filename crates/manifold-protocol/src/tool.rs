//! Raw and adapted tool records.

use crate::SourceDescriptor;
use serde_json::Value;
use std::sync::Arc;

/// Tool description exactly as reported by its source.
#[derive(Debug, Clone)]
pub struct RawTool {
    /// Source-local tool name; may collide across sources.
    pub name: String,
    /// Tool description as reported; may be empty.
    pub description: String,
    /// Input schema as reported, in whatever dialect the source uses.
    pub input_schema: Value,
    /// Output schema as reported, when the source provides one.
    pub output_schema: Option<Value>,
    /// The source that reported this tool.
    pub source: Arc<SourceDescriptor>,
}

/// Tool description after name sanitization and schema normalization,
/// safe for catalog and host-framework consumption.
#[derive(Debug, Clone)]
pub struct AdaptedTool {
    /// Catalog-unique name, at most 64 characters.
    pub name: String,
    /// Tool description, never empty.
    pub description: String,
    /// Input schema normalized to strict JSON Schema.
    pub input_schema: Value,
    /// The raw record this tool was adapted from.
    pub raw: RawTool,
}
