//! Source configuration loading.
//!
//! The configuration surface is intentionally small: an ordered list of
//! source descriptors and nothing else. Files are JSON5 so hand-written
//! configs can carry comments and trailing commas.

use manifold_protocol::{AdapterError, SourceDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered set of configured tool sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Source descriptors in configuration order.
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
}

/// Load source descriptors from a JSON5 config file.
pub fn load_sources_file(path: &Path) -> Result<SourcesConfig, AdapterError> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        AdapterError::Config(format!("failed to read {}: {err}", path.display()))
    })?;
    json5::from_str(&raw).map_err(|err| {
        AdapterError::Config(format!("failed to parse {}: {err}", path.display()))
    })
}

/// Decode source descriptors from an in-memory JSON value.
pub fn sources_from_value(value: serde_json::Value) -> Result<SourcesConfig, AdapterError> {
    serde_json::from_value(value)
        .map_err(|err| AdapterError::Config(format!("invalid sources config: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifold_protocol::{ProtocolKind, Transport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sources_decode_in_configuration_order() {
        let config = sources_from_value(json!({
            "sources": [
                { "name": "petstore", "protocol": "http", "url": "https://petstore.example.com/tools" },
                { "name": "inventory", "protocol": "tcp", "host": "127.0.0.1", "port": 9000 },
                { "name": "manifest", "protocol": "text", "file_path": "/etc/manifold/tools.json" },
            ]
        }))
        .expect("decode");

        let kinds: Vec<ProtocolKind> = config.sources.iter().map(SourceDescriptor::kind).collect();
        assert_eq!(
            kinds,
            vec![ProtocolKind::Http, ProtocolKind::Tcp, ProtocolKind::Text]
        );
        assert_eq!(
            config.sources[1].transport,
            Transport::Tcp {
                host: "127.0.0.1".to_string(),
                port: 9000,
            }
        );
    }

    #[test]
    fn unknown_protocol_is_a_config_error() {
        let result = sources_from_value(json!({
            "sources": [{ "name": "mystery", "protocol": "gopher", "url": "gopher://x" }]
        }));
        assert!(matches!(result, Err(AdapterError::Config(_))));
    }

    #[test]
    fn missing_sources_key_means_empty_set() {
        let config = sources_from_value(json!({})).expect("decode");
        assert!(config.sources.is_empty());
    }
}
