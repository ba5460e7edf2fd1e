//! Canonical cache-key derivation.
//!
//! A node's kind and parameters are framed as a JSON object, every nested
//! object is re-ordered into a `BTreeMap`, the canonical form is serialized
//! compactly, and the bytes are hashed with BLAKE3 into a fixed-width hex
//! digest. JSON framing gives every parameter a delimited position, so two
//! different field/value splits can never concatenate into the same
//! preimage.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

/// Derive the cache key for a specification node.
///
/// `kind` names the concrete node type; `params` carries its parameters.
/// Composites pass the cache keys of their children rather than the children
/// themselves, keeping keys finite for deep trees.
///
/// Equal `(kind, params)` pairs always produce equal keys, including when
/// parameter values are nested maps whose insertion order differs.
pub fn derive_cache_key(kind: &str, params: Value) -> String {
    let canonical = canonicalize(json!({ "kind": kind, "params": params }));
    let bytes = serde_json::to_vec(&canonical).expect("canonical form serializes");
    blake3::hash(&bytes).to_hex().to_string()
}

#[derive(Serialize)]
#[serde(untagged)]
enum CanonicalValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<CanonicalValue>),
    Object(BTreeMap<String, CanonicalValue>),
}

fn canonicalize(value: Value) -> CanonicalValue {
    match value {
        Value::Null => CanonicalValue::Null,
        Value::Bool(flag) => CanonicalValue::Bool(flag),
        Value::Number(number) => CanonicalValue::Number(number),
        Value::String(text) => CanonicalValue::String(text),
        Value::Array(items) => {
            CanonicalValue::Array(items.into_iter().map(canonicalize).collect())
        }
        Value::Object(entries) => CanonicalValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect(),
        ),
    }
}
