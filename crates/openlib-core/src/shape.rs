//! Normalization of polymorphic JSON fields
//!
//! Open Library emits several fields in more than one shape: a description
//! may be `"text"` or `{"type": "/type/text", "value": "text"}`, author
//! references may be bare strings, `{"key": ...}` objects or
//! `{"author": {"key": ...}}` wrappers. Each decoder here inspects the
//! concrete JSON kind and maps every accepted shape onto one canonical
//! value, or fails with [`ShapeError`].
//!
//! The [`de`] module adapts the decoders for `#[serde(deserialize_with)]`.

use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON value matched none of the shapes a decoder accepts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct ShapeError {
    pub expected: &'static str,
    pub found: String,
}

impl ShapeError {
    fn new(expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }

    fn kind_of(expected: &'static str, value: &Value) -> Self {
        Self::new(expected, json_kind(value))
    }
}

/// Output of a decoder: one string or an ordered list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedField {
    Single(String),
    List(Vec<String>),
}

impl NormalizedField {
    /// The single value, or the first element of a list
    pub fn into_single(self) -> Option<String> {
        match self {
            NormalizedField::Single(s) => Some(s),
            NormalizedField::List(list) => list.into_iter().next(),
        }
    }

    /// A list; a single value becomes a one-element list
    pub fn into_list(self) -> Vec<String> {
        match self {
            NormalizedField::Single(s) => vec![s],
            NormalizedField::List(list) => list,
        }
    }
}

/// The polymorphic field families known to the decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// Bios and descriptions: `"text"` or `{"value": "text"}`
    WrappedText,
    /// Work authors, subjects, `works` lists: strings or keyed objects
    KeyRefs,
    /// Edition authors: a single string or a key-ref list with a `url` fallback
    EditionAuthors,
    /// Publishers, edition subjects: strings or `{"name": ...}` objects
    Names,
    /// Recent-changes author: `"bob"` or `{"key": "/people/bob"}`
    AuthorKey,
}

impl FieldShape {
    pub fn decode(self, value: &Value) -> Result<NormalizedField, ShapeError> {
        match self {
            FieldShape::WrappedText => decode_text(value).map(NormalizedField::Single),
            FieldShape::KeyRefs => decode_key_refs(value).map(NormalizedField::List),
            FieldShape::EditionAuthors => decode_edition_authors(value).map(NormalizedField::List),
            FieldShape::Names => decode_names(value).map(NormalizedField::List),
            FieldShape::AuthorKey => decode_author_key(value).map(NormalizedField::Single),
        }
    }
}

/// Name of a JSON value's kind, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `"text"` or `{"value": "text"}`
pub fn decode_text(value: &Value) -> Result<String, ShapeError> {
    const EXPECTED: &str = "a string or an object with a string \"value\"";
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(obj) => string_field(obj, "value")
            .ok_or_else(|| ShapeError::new(EXPECTED, "object without string \"value\"")),
        other => Err(ShapeError::kind_of(EXPECTED, other)),
    }
}

/// Array of keys: strings taken as-is, objects reduced to their `author`
/// (string or `{"key"}`) or `key` field
pub fn decode_key_refs(value: &Value) -> Result<Vec<String>, ShapeError> {
    decode_list(value, "an array of strings or keyed objects", key_ref)
}

/// A single key string, or a key-ref array whose objects may fall back to `url`
pub fn decode_edition_authors(value: &Value) -> Result<Vec<String>, ShapeError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        _ => decode_list(
            value,
            "a string or an array of strings or keyed objects",
            |obj| key_ref(obj).or_else(|| string_field(obj, "url")),
        ),
    }
}

/// Array of strings or `{"name": ...}` objects
pub fn decode_names(value: &Value) -> Result<Vec<String>, ShapeError> {
    decode_list(value, "an array of strings or named objects", |obj| {
        string_field(obj, "name")
    })
}

/// `"bob"` or `{"key": "/people/bob"}`
pub fn decode_author_key(value: &Value) -> Result<String, ShapeError> {
    const EXPECTED: &str = "a string or an object with a string \"key\"";
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(obj) => string_field(obj, "key")
            .ok_or_else(|| ShapeError::new(EXPECTED, "object without string \"key\"")),
        other => Err(ShapeError::kind_of(EXPECTED, other)),
    }
}

/// Decode an array whose first element fixes the mode for all elements.
///
/// String mode keeps strings; any other element is an error. Object mode
/// runs `extract` on every element; a non-object element or a failed
/// extraction is an error.
fn decode_list(
    value: &Value,
    expected: &'static str,
    extract: impl Fn(&Map<String, Value>) -> Option<String>,
) -> Result<Vec<String>, ShapeError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(ShapeError::kind_of(expected, other)),
    };

    match items.first() {
        None => Ok(Vec::new()),
        Some(Value::String(_)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(ShapeError::new(
                    expected,
                    format!("{} at element {}", json_kind(other), i),
                )),
            })
            .collect(),
        Some(Value::Object(_)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(obj) => extract(obj).ok_or_else(|| {
                    ShapeError::new(expected, format!("element {} missing its key field", i))
                }),
                other => Err(ShapeError::new(
                    expected,
                    format!("{} at element {}", json_kind(other), i),
                )),
            })
            .collect(),
        Some(other) => Err(ShapeError::new(
            expected,
            format!("array of {}", json_kind(other)),
        )),
    }
}

/// `author` (one level of indirection) when present, otherwise `key`
fn key_ref(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("author") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(author)) => string_field(author, "key"),
        Some(_) => None,
        None => string_field(obj, "key"),
    }
}

fn string_field(obj: &Map<String, Value>, name: &str) -> Option<String> {
    obj.get(name).and_then(Value::as_str).map(str::to_string)
}

/// `deserialize_with` adapters.
///
/// An explicit JSON `null` is read as "absent" and yields the empty value;
/// every other shape goes through the strict decoder.
pub mod de {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::ShapeError;

    fn decoded<'de, D, T>(
        deserializer: D,
        decode: fn(&Value) -> Result<T, ShapeError>,
    ) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(T::default());
        }
        decode(&value).map_err(D::Error::custom)
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        decoded(deserializer, super::decode_text)
    }

    pub fn key_refs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        decoded(deserializer, super::decode_key_refs)
    }

    pub fn edition_authors<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        decoded(deserializer, super::decode_edition_authors)
    }

    pub fn names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        decoded(deserializer, super::decode_names)
    }

    /// `"bob"` or `{"key": "/people/bob"}`; also used for `type` references
    pub fn key_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        decoded(deserializer, super::decode_author_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_string_and_wrapped() {
        assert_eq!(decode_text(&json!("A bio")).unwrap(), "A bio");
        assert_eq!(
            decode_text(&json!({"type": "/type/text", "value": "A bio"})).unwrap(),
            "A bio"
        );
    }

    #[test]
    fn test_text_rejects_other_shapes() {
        let err = decode_text(&json!(42)).unwrap_err();
        assert_eq!(err.found, "number");
        assert!(decode_text(&json!(["a"])).is_err());
        assert!(decode_text(&json!({"type": "/type/text"})).is_err());
        assert!(decode_text(&json!({"value": 7})).is_err());
        assert!(decode_text(&Value::Null).is_err());
    }

    #[test]
    fn test_key_refs() {
        assert_eq!(decode_key_refs(&json!(["a", "b"])).unwrap(), vec!["a", "b"]);
        assert_eq!(
            decode_key_refs(&json!([{"key": "/authors/OL1A"}])).unwrap(),
            vec!["/authors/OL1A"]
        );
        assert!(decode_key_refs(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_key_refs_author_indirection() {
        let value = json!([
            {"author": {"key": "/authors/OL34184A"}, "type": {"key": "/type/author_role"}},
            {"author": "/authors/OL2A"},
        ]);
        assert_eq!(
            decode_key_refs(&value).unwrap(),
            vec!["/authors/OL34184A", "/authors/OL2A"]
        );
    }

    #[test]
    fn test_key_refs_preserves_duplicates_and_order() {
        assert_eq!(
            decode_key_refs(&json!(["b", "a", "b"])).unwrap(),
            vec!["b", "a", "b"]
        );
    }

    #[test]
    fn test_key_refs_first_element_picks_mode() {
        // string mode rejects stray objects and numbers
        let err = decode_key_refs(&json!(["a", {"key": "/k"}])).unwrap_err();
        assert_eq!(err.found, "object at element 1");
        assert!(decode_names(&json!(["Penguin", 7])).is_err());
        // object mode rejects stray strings
        assert!(decode_key_refs(&json!([{"key": "/k"}, "a"])).is_err());
    }

    #[test]
    fn test_key_refs_object_without_key_fails() {
        let err = decode_key_refs(&json!([{"name": "x"}])).unwrap_err();
        assert!(err.found.contains("element 0"));
        assert!(decode_key_refs(&json!([{"author": 5}])).is_err());
        assert!(decode_key_refs(&json!("a")).is_err());
        assert!(decode_key_refs(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_edition_authors() {
        assert_eq!(
            decode_edition_authors(&json!("/authors/OL1A")).unwrap(),
            vec!["/authors/OL1A"]
        );
        assert_eq!(
            decode_edition_authors(&json!([{"author": {"key": "/authors/OL5A"}}])).unwrap(),
            vec!["/authors/OL5A"]
        );
        assert_eq!(
            decode_edition_authors(&json!([{"key": "/authors/OL6A"}])).unwrap(),
            vec!["/authors/OL6A"]
        );
        assert_eq!(
            decode_edition_authors(&json!([{"url": "https://openlibrary.org/authors/OL7A", "name": "X"}]))
                .unwrap(),
            vec!["https://openlibrary.org/authors/OL7A"]
        );
        assert!(decode_edition_authors(&json!({"key": "/authors/OL1A"})).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(
            decode_names(&json!(["Penguin", "Viking"])).unwrap(),
            vec!["Penguin", "Viking"]
        );
        assert_eq!(
            decode_names(&json!([{"name": "Puffin"}, {"name": "Knopf"}])).unwrap(),
            vec!["Puffin", "Knopf"]
        );
        assert!(decode_names(&json!([{"key": "/publishers/x"}])).is_err());
    }

    #[test]
    fn test_author_key() {
        assert_eq!(
            decode_author_key(&json!({"key": "/people/bob"})).unwrap(),
            "/people/bob"
        );
        assert_eq!(decode_author_key(&json!("bob")).unwrap(), "bob");
        assert!(decode_author_key(&json!(["bob"])).is_err());
    }

    #[test]
    fn test_field_shape_dispatch() {
        assert_eq!(
            FieldShape::WrappedText.decode(&json!({"value": "x"})).unwrap(),
            NormalizedField::Single("x".to_string())
        );
        assert_eq!(
            FieldShape::Names.decode(&json!(["a"])).unwrap().into_single(),
            Some("a".to_string())
        );
        assert_eq!(
            FieldShape::AuthorKey.decode(&json!("bob")).unwrap().into_list(),
            vec!["bob"]
        );
    }
}
