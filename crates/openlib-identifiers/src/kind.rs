//! Identifier kinds and classification of raw identifier strings
//!
//! Open Library accepts several identifier families for book lookups.
//! A raw identifier may carry a declared prefix (`ISBN:0451526538`) or be
//! bare; bare OLIDs (`OL1234W`) are recognized from their shape.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // OL + digits + an uppercase type letter (W, M, A, ...)
    static ref OLID_PATTERN: Regex = Regex::new(r"^OL\d+[A-Z]").unwrap();
}

/// Types of book identifiers understood by the Open Library API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// International Standard Book Number (10 or 13 digits)
    #[serde(rename = "ISBN")]
    Isbn,
    /// Open Library identifier (`OL123W`, `OL123M`, `OL123A`)
    #[serde(rename = "OLID")]
    Olid,
    /// Library of Congress Control Number
    #[serde(rename = "LCCN")]
    Lccn,
    /// OCLC / WorldCat number
    #[serde(rename = "OCLC")]
    Oclc,
    /// Plain numeric id (cover ids and the like); carries no bibkey prefix
    Generic,
}

impl IdentifierKind {
    /// Get all identifier kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Isbn,
            IdentifierKind::Olid,
            IdentifierKind::Lccn,
            IdentifierKind::Oclc,
            IdentifierKind::Generic,
        ]
    }

    /// Bibkey prefix for this kind, `None` for [`IdentifierKind::Generic`]
    pub fn as_prefix(self) -> Option<&'static str> {
        match self {
            IdentifierKind::Isbn => Some("ISBN"),
            IdentifierKind::Olid => Some("OLID"),
            IdentifierKind::Lccn => Some("LCCN"),
            IdentifierKind::Oclc => Some("OCLC"),
            IdentifierKind::Generic => None,
        }
    }

    /// Lower-case path segment used by the covers and partner APIs
    pub fn path_segment(self) -> &'static str {
        match self {
            IdentifierKind::Isbn => "isbn",
            IdentifierKind::Olid => "olid",
            IdentifierKind::Lccn => "lccn",
            IdentifierKind::Oclc => "oclc",
            IdentifierKind::Generic => "id",
        }
    }

    /// Match a declared prefix. Case-sensitive and exact.
    pub fn from_prefix(prefix: &str) -> Option<IdentifierKind> {
        match prefix {
            "ISBN" => Some(IdentifierKind::Isbn),
            "OLID" => Some(IdentifierKind::Olid),
            "LCCN" => Some(IdentifierKind::Lccn),
            "OCLC" => Some(IdentifierKind::Oclc),
            _ => None,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_prefix().unwrap_or("Generic"))
    }
}

/// Result of classifying a raw identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Inferred kind, `None` when it could not be determined
    pub kind: Option<IdentifierKind>,
    /// Value with any prefix removed (text after the last `:`)
    pub value: String,
    /// Text before the first `:`, if the identifier contains one
    pub declared_prefix: Option<String>,
}

/// Classify a raw identifier string.
///
/// A recognized declared prefix wins; otherwise a bare value shaped like an
/// OLID is classified as [`IdentifierKind::Olid`]. Anything else yields
/// `kind: None` and the caller must supply the kind explicitly.
pub fn classify(raw: &str) -> Classification {
    let value = match raw.rfind(':') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    };
    let declared_prefix = raw.find(':').map(|idx| &raw[..idx]);

    let kind = declared_prefix
        .filter(|p| !p.is_empty())
        .and_then(IdentifierKind::from_prefix)
        .or_else(|| OLID_PATTERN.is_match(value).then_some(IdentifierKind::Olid));

    Classification {
        kind,
        value: value.to_string(),
        declared_prefix: declared_prefix.map(str::to_string),
    }
}

/// Check whether a bare value has the shape of an Open Library id
pub fn is_olid(value: &str) -> bool {
    OLID_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_declared_prefix() {
        let c = classify("ISBN:0451526538");
        assert_eq!(c.kind, Some(IdentifierKind::Isbn));
        assert_eq!(c.value, "0451526538");
        assert_eq!(c.declared_prefix.as_deref(), Some("ISBN"));
    }

    #[test]
    fn test_classify_prefix_is_case_sensitive() {
        let c = classify("isbn:0451526538");
        assert_eq!(c.kind, None);
        assert_eq!(c.declared_prefix.as_deref(), Some("isbn"));
    }

    #[test]
    fn test_classify_bare_olid() {
        assert_eq!(classify("OL1234W").kind, Some(IdentifierKind::Olid));
        assert_eq!(classify("OL7353617M").kind, Some(IdentifierKind::Olid));
        assert_eq!(classify("OL23919A").declared_prefix, None);
    }

    #[test]
    fn test_classify_unknown() {
        let c = classify("0451526538");
        assert_eq!(c.kind, None);
        assert_eq!(c.value, "0451526538");
        assert_eq!(c.declared_prefix, None);

        // lower-case type letter is not an OLID
        assert_eq!(classify("OL1234w").kind, None);
        assert_eq!(classify("OLW").kind, None);
    }

    #[test]
    fn test_classify_unrecognized_prefix_falls_back_to_shape() {
        let c = classify("foo:OL1M");
        assert_eq!(c.kind, Some(IdentifierKind::Olid));
        assert_eq!(c.value, "OL1M");
        assert_eq!(c.declared_prefix.as_deref(), Some("foo"));
    }

    #[test]
    fn test_classify_uses_last_colon_for_value_and_first_for_prefix() {
        let c = classify("OCLC:a:b");
        assert_eq!(c.kind, Some(IdentifierKind::Oclc));
        assert_eq!(c.value, "b");
        assert_eq!(c.declared_prefix.as_deref(), Some("OCLC"));
    }

    #[test]
    fn test_classify_empty_prefix() {
        let c = classify(":12345");
        assert_eq!(c.kind, None);
        assert_eq!(c.declared_prefix.as_deref(), Some(""));
        assert_eq!(c.value, "12345");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(IdentifierKind::Isbn.path_segment(), "isbn");
        assert_eq!(IdentifierKind::Generic.path_segment(), "id");
    }
}
