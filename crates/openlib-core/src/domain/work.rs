//! Works: the abstract book, grouping all of its editions
//!
//! Endpoints: `works/{olid}.json`, `works/{olid}/ratings.json`,
//! `works/{olid}/bookshelves.json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

/// `works/OL45883W.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    /// e.g. `/works/OL45883W`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, deserialize_with = "shape::de::text")]
    pub description: String,
    /// Author keys, e.g. `/authors/OL34184A`
    #[serde(rename = "authors", default, deserialize_with = "shape::de::key_refs")]
    pub author_keys: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::key_refs")]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub subject_places: Vec<String>,
    #[serde(default)]
    pub subject_people: Vec<String>,
    #[serde(default)]
    pub subject_times: Vec<String>,
    /// Cover ids for the covers API
    #[serde(default)]
    pub covers: Vec<i64>,
    #[serde(default)]
    pub first_publish_date: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// `summary` object of `works/{olid}/ratings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingsSummary {
    /// Absent or null for works nobody has rated
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default = "unknown")]
    pub count: i64,
    #[serde(default)]
    pub sortable: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// `counts` object of `works/{olid}/ratings.json`: votes per star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCounts {
    #[serde(rename = "1", default = "unknown")]
    pub one: i64,
    #[serde(rename = "2", default = "unknown")]
    pub two: i64,
    #[serde(rename = "3", default = "unknown")]
    pub three: i64,
    #[serde(rename = "4", default = "unknown")]
    pub four: i64,
    #[serde(rename = "5", default = "unknown")]
    pub five: i64,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// Both halves of `works/{olid}/ratings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRatings {
    pub summary: RatingsSummary,
    pub counts: RatingCounts,
}

/// `counts` object of `works/{olid}/bookshelves.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookshelfCounts {
    #[serde(default = "unknown")]
    pub want_to_read: i64,
    #[serde(default = "unknown")]
    pub currently_reading: i64,
    #[serde(default = "unknown")]
    pub already_read: i64,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpenLibError;
    use crate::parse::parse_payload;

    const WORK: &str = r#"{
        "title": "Fantastic Mr. Fox",
        "key": "/works/OL45883W",
        "authors": [{"author": {"key": "/authors/OL34184A"}, "type": {"key": "/type/author_role"}}],
        "type": {"key": "/type/work"},
        "description": {"type": "/type/text", "value": "The main character of Fantastic Mr. Fox is an animal."},
        "covers": [6498519, 8904777],
        "subjects": ["Animals", "Foxes", "Fiction"],
        "first_publish_date": "1970",
        "revision": 34
    }"#;

    #[test]
    fn test_parse_work() {
        let work: Work = parse_payload(WORK, None).unwrap();
        assert_eq!(work.key, "/works/OL45883W");
        assert_eq!(work.author_keys, vec!["/authors/OL34184A"]);
        assert_eq!(
            work.description,
            "The main character of Fantastic Mr. Fox is an animal."
        );
        assert_eq!(work.covers, vec![6498519, 8904777]);
        assert_eq!(work.subjects.len(), 3);
        assert!(work.subtitle.is_empty());
        assert!(work.extra.contains_key("revision"));
        assert!(work.extra.contains_key("type"));
        assert!(!work.extra.contains_key("title"));
    }

    #[test]
    fn test_plain_string_description() {
        let work: Work =
            parse_payload(r#"{"key": "/works/OL1W", "description": "Short."}"#, None).unwrap();
        assert_eq!(work.description, "Short.");
        assert!(work.author_keys.is_empty());
    }

    #[test]
    fn test_bad_description_fails_whole_parse() {
        let err = parse_payload::<Work>(r#"{"key": "/works/OL1W", "description": 42}"#, None)
            .unwrap_err();
        assert!(matches!(err, OpenLibError::MalformedShape(_)));
    }

    #[test]
    fn test_equality_ignores_extension_values() {
        let a: Work = parse_payload(r#"{"key": "/works/OL1W", "revision": 1}"#, None).unwrap();
        let b: Work = parse_payload(r#"{"key": "/works/OL1W", "revision": 2}"#, None).unwrap();
        let c: Work = parse_payload(r#"{"key": "/works/OL1W", "created": 2}"#, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_list_equality_is_ordered() {
        let a: Work = parse_payload(r#"{"subjects": ["a", "b"]}"#, None).unwrap();
        let b: Work = parse_payload(r#"{"subjects": ["b", "a"]}"#, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ratings() {
        let body = r#"{
            "summary": {"average": 4.2, "count": 10, "sortable": 3.9},
            "counts": {"1": 0, "2": 1, "3": 1, "4": 2, "5": 6}
        }"#;
        let summary: RatingsSummary = parse_payload(body, Some("summary")).unwrap();
        assert_eq!(summary.average, Some(4.2));
        assert_eq!(summary.count, 10);
        let counts: RatingCounts = parse_payload(body, Some("counts")).unwrap();
        assert_eq!(counts.five, 6);
        assert_eq!(counts.one, 0);
    }

    #[test]
    fn test_unrated_work() {
        let summary: RatingsSummary =
            parse_payload(r#"{"summary": {"average": null, "count": 0}}"#, Some("summary")).unwrap();
        assert_eq!(summary.average, None);
        assert_eq!(summary.sortable, None);
    }

    #[test]
    fn test_bookshelves() {
        let counts: BookshelfCounts = parse_payload(
            r#"{"counts": {"want_to_read": 120, "currently_reading": 7}}"#,
            Some("counts"),
        )
        .unwrap();
        assert_eq!(counts.want_to_read, 120);
        assert_eq!(counts.currently_reading, 7);
        assert_eq!(counts.already_read, -1);
    }
}
