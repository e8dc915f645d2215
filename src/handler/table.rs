//! Chain stage backed by a parsed [`RedirectTable`].

use axum::response::Response;

use super::{found, Fallback, PathHandler};
use crate::cli::ConfigFormat;
use crate::config;
use crate::config::model::RedirectTable;
use crate::error::WaypostError;

/// Scans an ordered table for the first exact path match. On a hit the
/// request is answered with `302 Found`; on a miss it is passed to the
/// fallback unmodified.
pub struct TableHandler {
    table: RedirectTable,
    fallback: Fallback,
}

impl TableHandler {
    #[must_use]
    pub fn new(table: RedirectTable, fallback: Fallback) -> Self {
        Self { table, fallback }
    }

    /// Build a stage directly from raw mapping text in the declared format.
    ///
    /// Parsing and validation happen here, at construction; a constructed
    /// stage cannot fail at request time.
    pub fn from_source(
        format: ConfigFormat,
        content: &str,
        label: &str,
        fallback: Fallback,
    ) -> Result<Self, WaypostError> {
        let table = config::build_table(format, content, label)?;
        Ok(Self::new(table, fallback))
    }
}

impl std::fmt::Debug for TableHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableHandler")
            .field("table", &self.table)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl PathHandler for TableHandler {
    fn name(&self) -> &'static str {
        "table"
    }

    fn handle(&self, path: &str) -> Response {
        match self.table.resolve(path) {
            Some(url) => found(self.name(), path, url),
            None => self.fallback.handle(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use super::*;
    use crate::handler::greeting::GreetingHandler;

    fn terminal() -> Fallback {
        Box::new(GreetingHandler)
    }

    #[test]
    fn hit_redirects_with_location() {
        let yaml = "- path: /docs\n  url: https://example.com/docs\n";
        let handler =
            TableHandler::from_source(ConfigFormat::Yaml, yaml, "test", terminal()).unwrap();

        let response = handler.handle("/docs");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/docs"
        );
    }

    #[test]
    fn miss_delegates_to_fallback() {
        let yaml = "- path: /docs\n  url: https://example.com/docs\n";
        let handler =
            TableHandler::from_source(ConfigFormat::Yaml, yaml, "test", terminal()).unwrap();

        let response = handler.handle("/missing");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn duplicate_paths_resolve_to_first_entry() {
        let yaml = "\
- path: /dup
  url: https://first.example.com/
- path: /dup
  url: https://second.example.com/
";
        let handler =
            TableHandler::from_source(ConfigFormat::Yaml, yaml, "test", terminal()).unwrap();

        let response = handler.handle("/dup");
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://first.example.com/"
        );
    }

    #[test]
    fn invalid_yaml_fails_at_construction() {
        let err = TableHandler::from_source(ConfigFormat::Yaml, ": not yaml [", "test", terminal())
            .unwrap_err();
        assert!(matches!(err, WaypostError::ConfigParse { .. }));
    }

    #[test]
    fn missing_url_field_fails_at_construction() {
        let yaml = "- path: /docs\n";
        let err = TableHandler::from_source(ConfigFormat::Yaml, yaml, "test", terminal())
            .unwrap_err();
        assert!(matches!(err, WaypostError::ConfigParse { .. }));
    }

    #[test]
    fn json_source_behaves_like_yaml() {
        let json = r#"[{ "path": "/docs", "url": "https://example.com/docs" }]"#;
        let handler =
            TableHandler::from_source(ConfigFormat::Json, json, "test", terminal()).unwrap();

        let response = handler.handle("/docs");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/docs"
        );
    }
}
