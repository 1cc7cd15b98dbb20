//! Shared data model for the Manifold tool adapter: source descriptors,
//! raw and adapted tool records, and the error taxonomy crossing the
//! adapter boundary.

mod error;
mod source;
mod tool;

/// Adapter error taxonomy and transport failure types.
pub use error::{AdapterError, FailureKind, TransportFailure};
/// Source descriptor and per-protocol transport parameters.
pub use source::{ProtocolKind, SourceDescriptor, Transport};
/// Raw and adapted tool records.
pub use tool::{AdaptedTool, RawTool};
