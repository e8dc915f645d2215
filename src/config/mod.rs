//! Mapping configuration loading and built-in defaults.
//!
//! Provides [`parse_mappings`] for format-specific deserialization,
//! [`build_table`] for the parse-then-validate pipeline, and
//! [`load_table`] for the async file read that feeds the primary lookup
//! stage. Submodules hold the data model and validation logic.
//!
//! Every default the server ships with lives here as a named constant:
//! listen address, the built-in literal map, and the sample documents
//! used when `run` is started without a mapping file.

pub mod model;
pub mod validation;

use std::path::Path;

use crate::cli::ConfigFormat;
use crate::error::WaypostError;
use model::{Mapping, RedirectTable};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Literal mapping behind the second chain stage. Always present,
/// regardless of which mapping file the first stage was built from.
pub const BUILTIN_REDIRECTS: &[(&str, &str)] = &[
    ("/waypost-docs", "https://docs.rs/waypost"),
    ("/waypost-source", "https://github.com/waypost/waypost"),
];

/// Sample YAML document: the default table for `run` without `--config`,
/// and the starter file written by `waypost init`.
pub const SAMPLE_YAML: &str = r"# Waypost mappings - https://github.com/waypost/waypost

- path: /axum
  url: https://docs.rs/axum/latest/axum/
- path: /tokio
  url: https://tokio.rs/
";

/// Sample JSON document, the `--format json` counterpart of [`SAMPLE_YAML`].
pub const SAMPLE_JSON: &str = r#"[
  { "path": "/serde", "url": "https://serde.rs/" }
]
"#;

#[must_use]
pub const fn sample_for(format: ConfigFormat) -> &'static str {
    match format {
        ConfigFormat::Yaml => SAMPLE_YAML,
        ConfigFormat::Json => SAMPLE_JSON,
    }
}

/// Parse a mapping document in the declared format.
///
/// Both formats deserialize to the same sequence of [`Mapping`] records;
/// they are behaviorally identical from here on.
pub fn parse_mappings(
    format: ConfigFormat,
    content: &str,
    label: &str,
) -> Result<Vec<Mapping>, WaypostError> {
    match format {
        ConfigFormat::Yaml => {
            serde_yml::from_str(content).map_err(|e| WaypostError::ConfigParse {
                path: label.to_string(),
                source: Box::new(e),
            })
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| WaypostError::ConfigParse {
                path: label.to_string(),
                source: Box::new(e),
            })
        }
    }
}

/// Parse and validate a mapping document into a [`RedirectTable`].
///
/// This is the only fallible step in building a lookup stage; once a
/// table exists it cannot fail at request time.
pub fn build_table(
    format: ConfigFormat,
    content: &str,
    label: &str,
) -> Result<RedirectTable, WaypostError> {
    let mappings = parse_mappings(format, content, label)?;

    if let Err(errors) = validation::validate(&mappings) {
        return Err(WaypostError::ConfigValidation { errors });
    }

    Ok(RedirectTable::new(mappings))
}

/// Load the primary redirect table from a file, or from the built-in
/// sample for the declared format when no file is given.
pub async fn load_table(
    path: Option<&Path>,
    format: ConfigFormat,
) -> Result<RedirectTable, WaypostError> {
    match path {
        Some(path) => {
            let content = read_mapping_file(path).await?;
            build_table(format, &content, &path.display().to_string())
        }
        None => {
            tracing::info!(format = format.extension(), "no mapping file given, using built-in sample");
            build_table(format, sample_for(format), "(built-in sample)")
        }
    }
}

async fn read_mapping_file(path: &Path) -> Result<String, WaypostError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WaypostError::ConfigFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WaypostError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_yaml_builds_a_table() {
        let table = build_table(ConfigFormat::Yaml, SAMPLE_YAML, "sample").unwrap();
        assert!(!table.is_empty());
        assert_eq!(
            table.resolve("/axum"),
            Some("https://docs.rs/axum/latest/axum/")
        );
    }

    #[test]
    fn sample_json_builds_a_table() {
        let table = build_table(ConfigFormat::Json, SAMPLE_JSON, "sample").unwrap();
        assert_eq!(table.resolve("/serde"), Some("https://serde.rs/"));
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_not_found() {
        let err = load_table(Some(Path::new("/no/such/file.yaml")), ConfigFormat::Yaml)
            .await
            .unwrap_err();
        assert!(matches!(err, WaypostError::ConfigFileNotFound { .. }));
    }
}
