//! Payload parsing with optional drill-down
//!
//! Most list endpoints wrap the interesting data in an envelope
//! (`{"size": 3, "entries": [...]}`, `{"numFound": 9, "docs": [...]}`).
//! A drill path names the single top-level property to decode instead of
//! the whole document.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{OpenLibError, Result};

/// Parse `raw` as `T`, or the top-level property `drill_path` of it.
///
/// An empty drill path means the whole document. Invalid JSON is a
/// [`OpenLibError::ParseError`], an absent property a
/// [`OpenLibError::MissingField`], and any field that fails to decode a
/// [`OpenLibError::MalformedShape`]; no partial record is returned.
pub fn parse_payload<T: DeserializeOwned>(raw: &str, drill_path: Option<&str>) -> Result<T> {
    let document: Value =
        serde_json::from_str(raw).map_err(|e| OpenLibError::ParseError(e.to_string()))?;
    decode_document(document, drill_path)
}

/// Same as [`parse_payload`] for a raw response body
pub fn parse_payload_bytes<T: DeserializeOwned>(raw: &[u8], drill_path: Option<&str>) -> Result<T> {
    let document: Value =
        serde_json::from_slice(raw).map_err(|e| OpenLibError::ParseError(e.to_string()))?;
    decode_document(document, drill_path)
}

fn decode_document<T: DeserializeOwned>(document: Value, drill_path: Option<&str>) -> Result<T> {
    let target = match drill_path.filter(|p| !p.is_empty()) {
        None => document,
        Some(path) => drill(document, path)?,
    };
    serde_json::from_value(target).map_err(|e| OpenLibError::MalformedShape(e.to_string()))
}

fn drill(document: Value, path: &str) -> Result<Value> {
    match document {
        Value::Object(mut map) => map
            .remove(path)
            .ok_or_else(|| OpenLibError::MissingField(path.to_string())),
        _ => Err(OpenLibError::MissingField(path.to_string())),
    }
}
