//! Recent changes feed: `recentchanges[/{date}][/{kind}].json`

use serde::{Deserialize, Serialize};

use super::{unknown, ExtensionData};
use crate::shape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentChange {
    #[serde(default)]
    pub id: String,
    /// e.g. `add-book`, `edit-book`, `merge-authors`
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub comment: String,
    /// Account key or name; empty for anonymous edits
    #[serde(default, deserialize_with = "shape::de::key_or_string")]
    pub author: String,
    #[serde(default)]
    pub changes: Vec<ChangedKey>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedKey {
    #[serde(default)]
    pub key: String,
    #[serde(default = "unknown")]
    pub revision: i64,
    #[serde(flatten)]
    pub extra: ExtensionData,
}
