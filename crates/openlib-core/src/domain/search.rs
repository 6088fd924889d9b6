//! Search results: `search.json`, `search/authors.json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    #[serde(rename = "numFound", alias = "num_found", default = "unknown")]
    pub num_found: i64,
    #[serde(default)]
    pub start: i64,
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// A document from `search.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSearchDoc {
    /// e.g. `/works/OL27448W`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    /// Bare author OLIDs, e.g. `OL26320A`
    #[serde(default)]
    pub author_key: Vec<String>,
    #[serde(default = "unknown")]
    pub first_publish_year: i64,
    #[serde(default = "unknown")]
    pub edition_count: i64,
    #[serde(rename = "cover_i", default = "unknown")]
    pub cover_id: i64,
    #[serde(default)]
    pub isbn: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub publisher: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub subject: Vec<String>,
    #[serde(default)]
    pub has_fulltext: bool,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// A document from `search/authors.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSearchDoc {
    /// Bare OLID, e.g. `OL23919A`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub death_date: String,
    #[serde(default)]
    pub top_work: String,
    #[serde(default = "unknown")]
    pub work_count: i64,
    #[serde(default)]
    pub top_subjects: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_payload;

    const SEARCH: &str = r#"{
        "numFound": 629,
        "start": 0,
        "numFoundExact": true,
        "docs": [{
            "key": "/works/OL27448W",
            "title": "The Lord of the Rings",
            "author_name": ["J.R.R. Tolkien"],
            "author_key": ["OL26320A"],
            "first_publish_year": 1954,
            "edition_count": 120,
            "cover_i": 9255566,
            "publisher": ["Houghton Mifflin", "Allen & Unwin"],
            "ebook_access": "borrowable"
        }],
        "q": "the lord of the rings"
    }"#;

    #[test]
    fn test_search_page() {
        let page: SearchPage<WorkSearchDoc> = parse_payload(SEARCH, None).unwrap();
        assert_eq!(page.num_found, 629);
        assert_eq!(page.docs.len(), 1);
        assert!(page.extra.contains_key("q"));
        assert!(page.extra.contains_key("numFoundExact"));
    }

    #[test]
    fn test_docs_drill_down() {
        let docs: Vec<WorkSearchDoc> = parse_payload(SEARCH, Some("docs")).unwrap();
        let doc = &docs[0];
        assert_eq!(doc.cover_id, 9255566);
        assert_eq!(doc.publisher, vec!["Houghton Mifflin", "Allen & Unwin"]);
        assert!(doc.isbn.is_empty());
        assert!(doc.extra.contains_key("ebook_access"));
    }

    #[test]
    fn test_author_search_doc() {
        let docs: Vec<AuthorSearchDoc> = parse_payload(
            r#"{"numFound": 1, "docs": [{"key": "OL23919A", "name": "J. K. Rowling", "work_count": 421, "top_subjects": ["Fiction"]}]}"#,
            Some("docs"),
        )
        .unwrap();
        assert_eq!(docs[0].key, "OL23919A");
        assert_eq!(docs[0].work_count, 421);
        assert!(docs[0].top_work.is_empty());
    }
}
