//! Authors
//!
//! Endpoints: `authors/{olid}.json`, `authors/{olid}/works.json`

use serde::{Deserialize, Serialize};

use super::ExtensionData;
use crate::shape;

/// `authors/OL23919A.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// e.g. `/authors/OL23919A`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub personal_name: String,
    #[serde(default)]
    pub fuller_name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub death_date: String,
    #[serde(default, deserialize_with = "shape::de::text")]
    pub bio: String,
    /// Photo ids for the author photos API
    #[serde(default)]
    pub photos: Vec<i64>,
    #[serde(default)]
    pub links: Vec<AuthorLink>,
    #[serde(default)]
    pub wikipedia: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: ExtensionData,
}
