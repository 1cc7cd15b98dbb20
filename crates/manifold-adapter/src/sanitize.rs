//! Tool name sanitization for host-framework naming constraints.
//!
//! Host frameworks restrict tool names to `[A-Za-z0-9_]` and 64
//! characters. Raw source names (dotted paths, URLs, unicode) are mapped
//! into that alphabet; oversized or colliding names receive a short
//! unique suffix.

use std::collections::HashSet;
use uuid::Uuid;

/// Maximum length of an adapted tool name.
pub const MAX_NAME_LEN: usize = 64;
/// Prefix kept when an oversized name is truncated.
const TRUNCATED_PREFIX_LEN: usize = 55;
/// Width of the uniqueness suffix appended after truncation or collision.
const SUFFIX_LEN: usize = 8;

/// Replace characters outside the permitted alphabet with underscores.
///
/// Pure and idempotent: a name already within the alphabet maps to
/// itself. Length is not enforced here; see [`NameSanitizer::assign`].
pub fn sanitize_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        "tool".to_string()
    } else {
        name
    }
}

/// Assigns unique, host-safe names within one discovery pass.
#[derive(Debug, Default)]
pub struct NameSanitizer {
    assigned: HashSet<String>,
}

impl NameSanitizer {
    /// Create a sanitizer with no reserved names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize a raw tool name and reserve the result.
    ///
    /// A clean name of permitted characters and length maps to itself.
    /// Oversized names are truncated and suffixed; a collision replaces
    /// the suffix with a fresh one until the name is unique. The result
    /// is always at most [`MAX_NAME_LEN`] characters.
    pub fn assign(&mut self, raw_name: &str) -> String {
        let mut name = sanitize_name(raw_name);
        if name.len() > MAX_NAME_LEN {
            name = with_fresh_suffix(&name);
        }
        while self.assigned.contains(&name) {
            name = with_fresh_suffix(&name);
        }
        self.assigned.insert(name.clone());
        name
    }
}

/// Truncate to the fixed prefix and append a fresh unique suffix.
///
/// The input is ASCII by construction, so byte truncation is safe. The
/// result is at most `55 + 1 + 8 = 64` characters, and re-suffixing a
/// previously suffixed name replaces the old suffix.
fn with_fresh_suffix(name: &str) -> String {
    let prefix = &name[..name.len().min(TRUNCATED_PREFIX_LEN)];
    let unique = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &unique[..SUFFIX_LEN])
}
