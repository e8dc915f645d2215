//! Serde data structures for the Waypost mapping file.
//!
//! Contains [`Mapping`] (one path-to-URL association) and
//! [`RedirectTable`] (the ordered collection a lookup stage scans).
//! `Mapping` derives `Serialize` and `Deserialize` with
//! `deny_unknown_fields` for strict parsing; both fields are required,
//! so a document missing a `url` fails at parse time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Mapping {
    pub path: String,
    pub url: String,
}

/// Ordered sequence of mappings, built once at startup and immutable
/// thereafter. Iteration order is source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTable {
    entries: Vec<Mapping>,
}

impl RedirectTable {
    #[must_use]
    pub fn new(entries: Vec<Mapping>) -> Self {
        Self { entries }
    }

    /// Linear scan for the first entry whose path equals `path` exactly.
    /// Absence is normal flow, not an error.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| m.path == path)
            .map(|m| m.url.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(path: &str, url: &str) -> Mapping {
        Mapping {
            path: path.into(),
            url: url.into(),
        }
    }

    #[test]
    fn resolve_exact_match() {
        let table = RedirectTable::new(vec![mapping("/docs", "https://example.com/docs")]);
        assert_eq!(table.resolve("/docs"), Some("https://example.com/docs"));
    }

    #[test]
    fn resolve_is_exact_not_prefix() {
        let table = RedirectTable::new(vec![mapping("/docs", "https://example.com/docs")]);
        assert_eq!(table.resolve("/docs/nested"), None);
        assert_eq!(table.resolve("/doc"), None);
    }

    #[test]
    fn first_entry_wins_on_duplicate_paths() {
        let table = RedirectTable::new(vec![
            mapping("/dup", "https://first.example.com"),
            mapping("/dup", "https://second.example.com"),
        ]);
        assert_eq!(table.resolve("/dup"), Some("https://first.example.com"));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let table = RedirectTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.resolve("/anything"), None);
    }
}
