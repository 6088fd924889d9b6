//! Subjects: `subjects/{name}.json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// e.g. `/subjects/love`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject_type: String,
    #[serde(default = "unknown")]
    pub work_count: i64,
    #[serde(default)]
    pub works: Vec<SubjectWork>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

/// Work summary embedded in a subject page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectWork {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "unknown")]
    pub edition_count: i64,
    #[serde(default = "unknown")]
    pub cover_id: i64,
    #[serde(default)]
    pub cover_edition_key: String,
    #[serde(rename = "authors", default, deserialize_with = "shape::de::key_refs")]
    pub author_keys: Vec<String>,
    #[serde(default = "unknown")]
    pub first_publish_year: i64,
    #[serde(default)]
    pub has_fulltext: bool,
    #[serde(flatten)]
    pub extra: ExtensionData,
}
