//! Source descriptors and per-protocol connection parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire protocol spoken by a tool source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolKind {
    /// Plain HTTP request/response.
    Http,
    /// Server-sent events.
    Sse,
    /// Streamable HTTP.
    StreamableHttp,
    /// Local CLI process.
    Cli,
    /// GraphQL endpoint.
    Graphql,
    /// Model Context Protocol server.
    Mcp,
    /// Raw TCP socket.
    Tcp,
    /// Raw UDP socket.
    Udp,
    /// Static text manifest on disk.
    Text,
}

impl ProtocolKind {
    /// Whether sources of this kind hold persistent session state
    /// (a spawned process or an open socket).
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Cli | Self::Mcp | Self::Tcp | Self::Udp)
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Http => "http",
            Self::Sse => "sse",
            Self::StreamableHttp => "streamable_http",
            Self::Cli => "cli",
            Self::Graphql => "graphql",
            Self::Mcp => "mcp",
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Connection parameters for one tool source, tagged by protocol.
///
/// Each variant carries only the fields its protocol needs, so an
/// unsupported protocol is unrepresentable rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "snake_case")]
pub enum Transport {
    /// Plain HTTP endpoint.
    Http {
        url: String,
        #[serde(default = "default_http_method")]
        http_method: String,
        #[serde(default = "default_content_type")]
        content_type: String,
    },
    /// Server-sent events endpoint.
    Sse {
        url: String,
        #[serde(default = "default_http_method")]
        http_method: String,
        #[serde(default = "default_content_type")]
        content_type: String,
    },
    /// Streamable HTTP endpoint.
    StreamableHttp {
        url: String,
        #[serde(default = "default_http_method")]
        http_method: String,
        #[serde(default = "default_content_type")]
        content_type: String,
    },
    /// Local command-line tool provider.
    Cli { command: String },
    /// GraphQL endpoint.
    Graphql { url: String },
    /// MCP server launched as a child process.
    Mcp { command: String },
    /// TCP socket endpoint.
    Tcp { host: String, port: u16 },
    /// UDP socket endpoint.
    Udp { host: String, port: u16 },
    /// Static tool manifest file.
    Text { file_path: String },
}

impl Transport {
    /// Protocol kind of this transport.
    pub fn kind(&self) -> ProtocolKind {
        match self {
            Self::Http { .. } => ProtocolKind::Http,
            Self::Sse { .. } => ProtocolKind::Sse,
            Self::StreamableHttp { .. } => ProtocolKind::StreamableHttp,
            Self::Cli { .. } => ProtocolKind::Cli,
            Self::Graphql { .. } => ProtocolKind::Graphql,
            Self::Mcp { .. } => ProtocolKind::Mcp,
            Self::Tcp { .. } => ProtocolKind::Tcp,
            Self::Udp { .. } => ProtocolKind::Udp,
            Self::Text { .. } => ProtocolKind::Text,
        }
    }
}

/// A configured tool source: a name plus its transport parameters.
///
/// Immutable after construction. The name is configuration-scoped and
/// not guaranteed unique across the descriptor set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Configuration-scoped source name.
    pub name: String,
    /// Transport parameters for reaching the source.
    #[serde(flatten)]
    pub transport: Transport,
}

impl SourceDescriptor {
    /// Protocol kind of the underlying transport.
    pub fn kind(&self) -> ProtocolKind {
        self.transport.kind()
    }
}

/// Default HTTP method for the HTTP-family transports.
fn default_http_method() -> String {
    "GET".to_string()
}

/// Default content type for the HTTP-family transports.
fn default_content_type() -> String {
    "application/json".to_string()
}
