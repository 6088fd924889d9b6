//! Reading logs: `people/{user}/books/{shelf}.json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

/// Reading-log shelves exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shelf {
    WantToRead,
    CurrentlyReading,
    AlreadyRead,
}

impl Shelf {
    pub fn path_segment(self) -> &'static str {
        match self {
            Shelf::WantToRead => "want-to-read",
            Shelf::CurrentlyReading => "currently-reading",
            Shelf::AlreadyRead => "already-read",
        }
    }
}

/// Entry of `reading_log_entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingLogEntry {
    pub work: ReadingLogWork,
    /// Edition key, e.g. `/books/OL7353617M`
    #[serde(default)]
    pub logged_edition: String,
    #[serde(default)]
    pub logged_date: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingLogWork {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "shape::de::key_refs")]
    pub author_keys: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub author_names: Vec<String>,
    #[serde(default = "unknown")]
    pub first_publish_year: i64,
    #[serde(default)]
    pub edition_key: Vec<String>,
    #[serde(default = "unknown")]
    pub cover_id: i64,
    #[serde(default)]
    pub cover_edition_key: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}
