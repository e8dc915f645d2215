//! Chain stage backed by a literal path-to-URL map.

use std::collections::HashMap;

use axum::response::Response;

use super::{found, Fallback, PathHandler};

/// Exact-key lookup over an in-memory map. Absence of a key is normal
/// flow and goes to the fallback, never an error.
pub struct MapHandler {
    redirects: HashMap<String, String>,
    fallback: Fallback,
}

impl MapHandler {
    pub fn new<I, K, V>(redirects: I, fallback: Fallback) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            redirects: redirects
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fallback,
        }
    }

    /// Stage over the crate's built-in literal mapping.
    #[must_use]
    pub fn builtin(fallback: Fallback) -> Self {
        Self::new(crate::config::BUILTIN_REDIRECTS.iter().copied(), fallback)
    }
}

impl PathHandler for MapHandler {
    fn name(&self) -> &'static str {
        "map"
    }

    fn handle(&self, path: &str) -> Response {
        match self.redirects.get(path) {
            Some(url) => found(self.name(), path, url),
            None => self.fallback.handle(path),
        }
    }
}
