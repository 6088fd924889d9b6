//! User lists: `people/{user}/lists.json`, `people/{user}/lists/{id}/seeds.json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

/// Entry of `people/{user}/lists.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    /// e.g. `/people/george08/lists/OL97L`
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub full_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "unknown")]
    pub seed_count: i64,
    #[serde(default = "unknown")]
    pub edition_count: i64,
    #[serde(default)]
    pub last_update: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// Entry of `people/{user}/lists/{id}/seeds.json`: a work, edition, author or subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSeed {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub full_url: String,
    #[serde(default)]
    pub title: String,
    /// Type key, e.g. `/type/work`
    #[serde(rename = "type", default, deserialize_with = "shape::de::key_or_string")]
    pub seed_type: String,
    #[serde(default)]
    pub last_update: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_payload;

    #[test]
    fn test_user_lists() {
        let body = r#"{
            "links": {"self": "/people/george08/lists.json"},
            "size": 1,
            "entries": [{
                "url": "/people/george08/lists/OL97L",
                "full_url": "/people/george08/lists/OL97L/Favorites",
                "name": "Favorites",
                "seed_count": 12,
                "edition_count": 9,
                "last_update": "2023-05-01T10:00:00"
            }]
        }"#;
        let lists: Vec<ListSummary> = parse_payload(body, Some("entries")).unwrap();
        assert_eq!(lists[0].name, "Favorites");
        assert_eq!(lists[0].seed_count, 12);
        let size: i64 = parse_payload(body, Some("size")).unwrap();
        assert_eq!(size, 1);
    }

    #[test]
    fn test_seed_type_shapes() {
        let seeds: Vec<ListSeed> = parse_payload(
            r#"{"entries": [
                {"url": "/works/OL1W", "type": {"key": "/type/work"}, "title": "A"},
                {"url": "/subjects/foxes", "type": "subject"}
            ]}"#,
            Some("entries"),
        )
        .unwrap();
        assert_eq!(seeds[0].seed_type, "/type/work");
        assert_eq!(seeds[1].seed_type, "subject");
        assert!(seeds[1].title.is_empty());
    }
}
