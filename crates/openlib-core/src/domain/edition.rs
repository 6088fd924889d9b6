//! Editions: a particular published book
//!
//! Endpoints: `books/{olid}.json`, `isbn/{isbn}.json`,
//! `works/{olid}/editions.json` (under `entries`)

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

/// `books/OL7353617M.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// e.g. `/books/OL7353617M`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Author keys; older records carry a bare string or author URLs
    #[serde(rename = "authors", default, deserialize_with = "shape::de::edition_authors")]
    pub author_keys: Vec<String>,
    /// Keys of the works this edition belongs to
    #[serde(rename = "works", default, deserialize_with = "shape::de::key_refs")]
    pub work_keys: Vec<String>,
    #[serde(default)]
    pub isbn_10: Vec<String>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
    #[serde(default)]
    pub lccn: Vec<String>,
    #[serde(default)]
    pub oclc_numbers: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub publishers: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub publish_places: Vec<String>,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default = "unknown")]
    pub number_of_pages: i64,
    #[serde(default)]
    pub physical_format: String,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub subjects: Vec<String>,
    /// Language keys, e.g. `/languages/eng`
    #[serde(default, deserialize_with = "shape::de::key_refs")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub covers: Vec<i64>,
    #[serde(default, deserialize_with = "shape::de::text")]
    pub description: String,
    #[serde(default, deserialize_with = "shape::de::text")]
    pub notes: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_payload;

    const EDITION: &str = r#"{
        "publishers": ["Puffin"],
        "number_of_pages": 96,
        "isbn_10": ["0140328726"],
        "covers": [8739161],
        "key": "/books/OL7353617M",
        "authors": [{"key": "/authors/OL34184A"}],
        "title": "Fantastic Mr. Fox",
        "publish_date": "October 1, 1988",
        "works": [{"key": "/works/OL45883W"}],
        "isbn_13": ["9780140328721"],
        "languages": [{"key": "/languages/eng"}],
        "notes": {"type": "/type/text", "value": "Illustrated."},
        "latest_revision": 14
    }"#;

    #[test]
    fn test_parse_edition() {
        let edition: Edition = parse_payload(EDITION, None).unwrap();
        assert_eq!(edition.key, "/books/OL7353617M");
        assert_eq!(edition.author_keys, vec!["/authors/OL34184A"]);
        assert_eq!(edition.work_keys, vec!["/works/OL45883W"]);
        assert_eq!(edition.publishers, vec!["Puffin"]);
        assert_eq!(edition.languages, vec!["/languages/eng"]);
        assert_eq!(edition.number_of_pages, 96);
        assert_eq!(edition.notes, "Illustrated.");
        assert!(edition.extra.contains_key("latest_revision"));
    }

    #[test]
    fn test_sentinels() {
        let edition: Edition = parse_payload(r#"{"key": "/books/OL1M"}"#, None).unwrap();
        assert_eq!(edition.number_of_pages, -1);
        assert!(edition.publishers.is_empty());
        assert!(edition.title.is_empty());
        assert!(edition.extra.is_empty());
    }

    #[test]
    fn test_legacy_author_shapes() {
        let edition: Edition =
            parse_payload(r#"{"authors": [{"author": {"key": "/authors/OL5A"}}]}"#, None).unwrap();
        assert_eq!(edition.author_keys, vec!["/authors/OL5A"]);

        let edition: Edition = parse_payload(r#"{"authors": "/authors/OL9A"}"#, None).unwrap();
        assert_eq!(edition.author_keys, vec!["/authors/OL9A"]);
    }

    #[test]
    fn test_named_publishers() {
        let edition: Edition =
            parse_payload(r#"{"publishers": [{"name": "Knopf"}], "subjects": ["Foxes"]}"#, None)
                .unwrap();
        assert_eq!(edition.publishers, vec!["Knopf"]);
        assert_eq!(edition.subjects, vec!["Foxes"]);
    }

    #[test]
    fn test_editions_page() {
        let body = format!(r#"{{"links": {{}}, "size": 1, "entries": [{}]}}"#, EDITION);
        let entries: Vec<Edition> = parse_payload(&body, Some("entries")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].isbn_13, vec!["9780140328721"]);
    }
}
