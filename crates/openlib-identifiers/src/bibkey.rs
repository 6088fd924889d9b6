//! Bibkey normalization
//!
//! The batch books API addresses editions by bibkey: `ISBN:0451526538`,
//! `OLID:OL1M`, `LCCN:62019420`, `OCLC:1234`. A declared prefix on the
//! input is stripped and replaced by the requested kind's prefix; it is
//! never checked against that kind.

use crate::error::{IdentifierError, Result};
use crate::kind::{classify, IdentifierKind};

/// A canonical `PREFIX:value` bibkey (or a bare value for
/// [`IdentifierKind::Generic`])
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bibkey {
    kind: IdentifierKind,
    value: String,
}

impl Bibkey {
    /// Parse a string that is already a bibkey.
    ///
    /// The prefix must be one of `ISBN`, `OLID`, `LCCN`, `OCLC` and the
    /// value must be non-empty.
    pub fn parse(s: &str) -> Result<Bibkey> {
        let (prefix, value) = s
            .split_once(':')
            .ok_or_else(|| IdentifierError::InvalidBibkey(s.to_string()))?;
        let kind = IdentifierKind::from_prefix(prefix)
            .ok_or_else(|| IdentifierError::InvalidBibkey(s.to_string()))?;
        if value.is_empty() {
            return Err(IdentifierError::InvalidBibkey(s.to_string()));
        }
        Ok(Bibkey {
            kind,
            value: value.to_string(),
        })
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// The unprefixed value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Bibkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.as_prefix() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Build the canonical bibkey for `raw` under `kind`.
///
/// Anything up to and including the last `:` is dropped before the
/// kind's prefix is prepended, so `normalize(Isbn, "OLID:123")` yields
/// `ISBN:123`. The value matches [`classify`]'s pure value and never holds
/// a `:`, so feeding the output back in returns it unchanged, for
/// [`IdentifierKind::Generic`] too.
pub fn normalize(kind: IdentifierKind, raw: &str) -> Bibkey {
    let value = match raw.rsplit_once(':') {
        Some((_, rest)) => rest,
        None => raw,
    };
    Bibkey {
        kind,
        value: value.to_string(),
    }
}

/// Classify `raw` and normalize it, preferring an explicitly supplied kind.
///
/// Fails with [`IdentifierError::UnknownIdentifierKind`] when no kind was
/// given and none can be inferred.
pub fn resolve_bibkey(raw: &str, explicit: Option<IdentifierKind>) -> Result<Bibkey> {
    let kind = explicit
        .or_else(|| classify(raw).kind)
        .ok_or_else(|| IdentifierError::UnknownIdentifierKind(raw.to_string()))?;
    Ok(normalize(kind, raw))
}

/// Join bibkeys with `,` as expected by the `bibkeys` query parameter
pub fn join_bibkeys(keys: &[Bibkey]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
