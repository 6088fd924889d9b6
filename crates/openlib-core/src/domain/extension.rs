//! Catch-all bag for JSON keys without a named record field

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Unmapped JSON properties of a record, keyed by property name.
///
/// Equality compares key sets only: two bags holding the same keys are
/// equal even when the values differ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionData(BTreeMap<String, Value>);

impl ExtensionData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for ExtensionData {
    fn eq(&self, other: &Self) -> bool {
        // BTreeMap keys iterate sorted, so this is a set comparison
        self.0.len() == other.0.len() && self.0.keys().eq(other.0.keys())
    }
}

impl Eq for ExtensionData {}

impl From<BTreeMap<String, Value>> for ExtensionData {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}
