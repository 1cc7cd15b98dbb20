//! Schema normalization for heterogeneous source schemas.
//!
//! Sources report input schemas in loose dialects: nullable unions,
//! non-standard primitive names (`"file"`), wrapper envelopes around the
//! real schema. Normalization rewrites every node into strict JSON
//! Schema and never fails: anything unintelligible degrades to the
//! permissive empty schema and is recorded as a note.

use log::warn;
use serde_json::{Map, Value, json};

/// JSON Schema core type names accepted as-is.
const VALID_TYPES: &[&str] = &[
    "array", "boolean", "integer", "null", "number", "object", "string",
];
/// Fallback for unknown or null-only type tokens. Lossy by design;
/// the original name is preserved in the description.
const FALLBACK_TYPE: &str = "string";
/// Envelope keys whose sole object value is unwrapped to the inner schema.
const ENVELOPE_KEYS: &[&str] = &["json", "schema"];

/// Result of normalizing one schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Schema guaranteed valid against strict JSON Schema.
    pub schema: Value,
    /// One entry per lossy or degraded mapping, for source-level warnings.
    pub notes: Vec<String>,
}

/// Rewrite a raw input schema into a strict, valid JSON Schema document.
///
/// A schema that already uses only supported constructs passes through
/// structurally unchanged. A top-level object with properties but no
/// type is coerced to `"type": "object"`, matching what tool-input
/// schemas mean in practice.
pub fn normalize(raw: &Value) -> Normalized {
    let mut notes = Vec::new();
    let (mut schema, _) = normalize_node(raw, "$", &mut notes);
    if let Value::Object(map) = &mut schema
        && map.contains_key("properties")
        && !map.contains_key("type")
    {
        map.insert("type".to_string(), json!("object"));
    }
    Normalized { schema, notes }
}

/// Normalize one schema node. The boolean is true when a `"null"` token
/// was dropped from a type union, which makes the field optional in the
/// enclosing object.
fn normalize_node(node: &Value, path: &str, notes: &mut Vec<String>) -> (Value, bool) {
    match node {
        Value::Object(map) => normalize_object(map, path, notes),
        // Boolean schemas are valid as-is.
        Value::Bool(_) => (node.clone(), false),
        _ => {
            warn!("unrecognized schema construct at {path}, degrading to permissive schema");
            notes.push(format!("{path}: unrecognized schema construct degraded to {{}}"));
            (json!({}), false)
        }
    }
}

fn normalize_object(
    map: &Map<String, Value>,
    path: &str,
    notes: &mut Vec<String>,
) -> (Value, bool) {
    if let Some(inner) = unwrap_envelope(map) {
        return normalize_node(inner, path, notes);
    }

    let mut out = Map::new();
    let mut dropped_null = false;
    let mut nullable_props: Vec<String> = Vec::new();
    // Original type names replaced by the fallback, kept for the
    // description note.
    let mut replaced_types: Vec<String> = Vec::new();

    for (key, value) in map {
        match key.as_str() {
            "type" => {
                let (ty, nullable) = normalize_type(value, &mut replaced_types);
                dropped_null |= nullable;
                out.insert(key.clone(), ty);
            }
            "properties" => match value {
                Value::Object(props) => {
                    let mut normalized_props = Map::new();
                    for (prop, prop_schema) in props {
                        let prop_path = format!("{path}.{prop}");
                        let (normalized, nullable) =
                            normalize_node(prop_schema, &prop_path, notes);
                        if nullable {
                            nullable_props.push(prop.clone());
                        }
                        normalized_props.insert(prop.clone(), normalized);
                    }
                    out.insert(key.clone(), Value::Object(normalized_props));
                }
                _ => {
                    warn!("non-object properties at {path}, degrading to empty map");
                    notes.push(format!("{path}.properties: expected an object, replaced with {{}}"));
                    out.insert(key.clone(), json!({}));
                }
            },
            "items" => {
                let normalized = match value {
                    Value::Array(entries) => Value::Array(
                        entries
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                normalize_node(entry, &format!("{path}.items[{i}]"), notes).0
                            })
                            .collect(),
                    ),
                    other => normalize_node(other, &format!("{path}.items"), notes).0,
                };
                out.insert(key.clone(), normalized);
            }
            // Handled after properties so nullable fields can be removed.
            "required" => {}
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }

    match map.get("required") {
        Some(Value::Array(entries)) => {
            let kept: Vec<Value> = entries
                .iter()
                .filter(|entry| {
                    entry
                        .as_str()
                        .is_none_or(|name| !nullable_props.iter().any(|p| p.as_str() == name))
                })
                .cloned()
                .collect();
            if !kept.is_empty() {
                out.insert("required".to_string(), Value::Array(kept));
            }
        }
        Some(_) => {
            warn!("non-array required at {path}, dropping the keyword");
            notes.push(format!("{path}.required: expected an array, dropped"));
        }
        None => {}
    }

    if !replaced_types.is_empty() {
        let note = format!("originally: {}", replaced_types.join(", "));
        append_description_note(&mut out, &note);
        notes.push(format!("{path}: type mapped to {FALLBACK_TYPE} ({note})"));
    }

    (Value::Object(out), dropped_null)
}

/// Normalize a `"type"` token or union. Unknown primitives map to the
/// fallback type; `"null"` is dropped from unions and only survives as
/// the fallback when it is the sole member.
fn normalize_type(value: &Value, replaced: &mut Vec<String>) -> (Value, bool) {
    match value {
        Value::String(token) => {
            if token == "null" {
                replaced.push(token.clone());
                (json!(FALLBACK_TYPE), false)
            } else {
                (Value::String(map_type_token(token, replaced)), false)
            }
        }
        Value::Array(tokens) => {
            let mut kept: Vec<Value> = Vec::new();
            let mut saw_null = false;
            for token in tokens {
                match token.as_str() {
                    Some("null") => saw_null = true,
                    Some(name) => {
                        let mapped = Value::String(map_type_token(name, replaced));
                        // Union members must be unique; several unknown
                        // tokens can collapse onto the fallback.
                        if !kept.contains(&mapped) {
                            kept.push(mapped);
                        }
                    }
                    None => replaced.push(token.to_string()),
                }
            }
            match kept.len() {
                0 => {
                    if saw_null {
                        replaced.push("null".to_string());
                    }
                    (json!(FALLBACK_TYPE), saw_null)
                }
                1 => (kept.remove(0), saw_null),
                _ => (Value::Array(kept), saw_null),
            }
        }
        other => {
            replaced.push(other.to_string());
            (json!(FALLBACK_TYPE), false)
        }
    }
}

/// Map a single primitive type name into the valid set.
fn map_type_token(token: &str, replaced: &mut Vec<String>) -> String {
    if VALID_TYPES.contains(&token) {
        token.to_string()
    } else {
        replaced.push(token.to_string());
        FALLBACK_TYPE.to_string()
    }
}

/// Unwrap single-key `{"json": {...}}` / `{"schema": {...}}` envelopes
/// that carry no schema keywords of their own.
fn unwrap_envelope(map: &Map<String, Value>) -> Option<&Value> {
    if map.len() != 1 || map.contains_key("type") || map.contains_key("properties") {
        return None;
    }
    ENVELOPE_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .filter(|inner| inner.is_object())
}

/// Append an informational note to a node's description.
fn append_description_note(map: &mut Map<String, Value>, note: &str) {
    let description = match map.get("description").and_then(Value::as_str) {
        Some(existing) if !existing.is_empty() => format!("{existing} ({note})"),
        _ => format!("({note})"),
    };
    map.insert("description".to_string(), Value::String(description));
}
