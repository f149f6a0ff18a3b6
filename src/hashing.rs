//! Hashing - SHA-256 Render Fingerprints
//!
//! Same presentation and same filters must give the same fingerprint.

use sha2::{Sha256, Digest};
use serde::Serialize;
use serde_json::{Value, to_string};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                sorted
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_value(v)))
                    .collect(),
            )
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// fingerprint = sha256(canonical_presentation + ":" + html + ":" + engine_version)
pub fn compute_render_fingerprint(
    presentation: &impl Serialize,
    html: &str,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(presentation)?;
    let combined = format!("{}:{}:{}", canonical, html, engine_version);
    Ok(sha256_hex(combined.as_bytes()))
}
