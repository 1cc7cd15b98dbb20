//! Unified catalog of adapted tools.

use crate::sanitize::NameSanitizer;
use crate::schema::{Normalized, normalize};
use indexmap::IndexMap;
use log::debug;
use manifold_protocol::{AdaptedTool, AdapterError, RawTool};

/// Mapping from adapted name to tool record.
///
/// Built once per discovery pass, read-only afterwards; rebuilding
/// replaces the whole catalog. Key uniqueness is enforced by the name
/// sanitizer at build time, not by the catalog.
#[derive(Debug, Default)]
pub struct ToolCatalog {
    tools: IndexMap<String, AdaptedTool>,
}

impl ToolCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tool under its adapted name.
    pub(crate) fn insert(&mut self, tool: AdaptedTool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// All tools in stable insertion order.
    pub fn list(&self) -> impl Iterator<Item = &AdaptedTool> {
        self.tools.values()
    }

    /// Fetch a tool by adapted name.
    pub fn get(&self, name: &str) -> Option<&AdaptedTool> {
        self.tools.get(name)
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Ranked, case-insensitive substring search over names and
    /// descriptions.
    ///
    /// Ranking: exact name match, then name substring, then description
    /// substring; ties break by insertion order. An empty query matches
    /// every tool.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<&AdaptedTool> {
        let needle = query.to_lowercase();
        let mut ranked: Vec<(u8, usize, &AdaptedTool)> = Vec::new();
        for (index, tool) in self.tools.values().enumerate() {
            let name = tool.name.to_lowercase();
            let rank = if name == needle {
                0
            } else if name.contains(&needle) {
                1
            } else if tool.description.to_lowercase().contains(&needle) {
                2
            } else {
                continue;
            };
            ranked.push((rank, index, tool));
        }
        ranked.sort_by_key(|(rank, index, _)| (*rank, *index));
        ranked
            .into_iter()
            .take(max_results)
            .map(|(_, _, tool)| tool)
            .collect()
    }
}

/// Build a catalog from the raw tools of one discovery pass.
///
/// Runs name sanitization and schema normalization over every raw tool.
/// Schema degradations are returned as non-fatal
/// [`AdapterError::SchemaDegraded`] entries, never as failures.
pub fn build_catalog(raw_tools: Vec<RawTool>) -> (ToolCatalog, Vec<AdapterError>) {
    let mut sanitizer = NameSanitizer::new();
    let mut catalog = ToolCatalog::new();
    let mut degradations = Vec::new();

    for raw in raw_tools {
        let adapted_name = sanitizer.assign(&raw.name);
        let Normalized { schema, notes } = normalize(&raw.input_schema);
        for note in notes {
            degradations.push(AdapterError::SchemaDegraded {
                tool: adapted_name.clone(),
                message: note,
            });
        }
        let description = if raw.description.is_empty() {
            format!("Tool: {}", raw.name)
        } else {
            raw.description.clone()
        };
        debug!(
            "adapted tool (raw={}, adapted={adapted_name}, source={})",
            raw.name, raw.source.name
        );
        catalog.insert(AdaptedTool {
            name: adapted_name,
            description,
            input_schema: schema,
            raw,
        });
    }
    (catalog, degradations)
}
