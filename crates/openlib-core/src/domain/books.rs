//! Batch book lookup: `api/books?bibkeys=...&format=json&jscmd=data`
//!
//! The response is an object keyed by the requested bibkeys; bibkeys
//! the service does not know are simply absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{unknown, ExtensionData};
use crate::shape;

/// One value of the `jscmd=data` response map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    #[serde(default)]
    pub url: String,
    /// Edition key, e.g. `/books/OL1017798M`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Author display names
    #[serde(default, deserialize_with = "shape::de::names")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default = "unknown")]
    pub number_of_pages: i64,
    #[serde(default, deserialize_with = "shape::de::names")]
    pub subjects: Vec<String>,
    /// e.g. `isbn_13 → ["9780451526533"]`
    #[serde(default)]
    pub identifiers: BTreeMap<String, Vec<String>>,
    /// Cover URLs by size: `small`, `medium`, `large`
    #[serde(default)]
    pub cover: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}
