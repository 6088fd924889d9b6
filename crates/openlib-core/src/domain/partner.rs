//! Read/partner API: `api/volumes/brief/{kind}/{value}.json`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::ExtensionData;

/// Matching records and readable items; both kept as raw JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerResponse {
    /// Edition records keyed by edition key
    #[serde(default)]
    pub records: BTreeMap<String, Value>,
    /// Borrowable or full-access scans
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(flatten)]
    pub extra: ExtensionData,
}

impl PartnerResponse {
    /// Whether any item is readable without borrowing
    pub fn has_full_access(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.get("status").and_then(Value::as_str) == Some("full access"))
    }
}
