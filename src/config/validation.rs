//! Mapping validation with detailed error reporting.
//!
//! The [`validate`] function checks parsed [`Mapping`] entries for
//! structural errors such as an empty document, paths that do not start
//! with `/`, and missing or malformed target URLs. Returns a list of
//! [`ValidationError`] values with per-field suggestions instead of
//! stopping at the first problem.
//!
//! Duplicate paths are deliberately not an error: the table resolves the
//! first entry in source order, so later duplicates are unreachable but
//! harmless.

use url::Url;

use super::model::Mapping;
use crate::error::ValidationError;

/// Validate a single mapping path. Returns `Ok(())` or a human-readable error.
pub fn validate_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path cannot be empty".into());
    }
    if !path.starts_with('/') {
        return Err(format!("path must start with '/' (did you mean '/{path}'?)"));
    }
    Ok(())
}

/// Validate a single target URL. Returns `Ok(())` or a human-readable error.
///
/// An explicitly empty URL is rejected here rather than being treated as
/// "not found" at request time, so the served table never carries an
/// entry that can match but not redirect.
pub fn validate_target_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("url cannot be empty".into());
    }
    match Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            if scheme != "http" && scheme != "https" {
                Err(format!(
                    "unsupported scheme '{scheme}' (expected http or https)"
                ))
            } else {
                Ok(())
            }
        }
        Err(_) => Err(format!("'{url}' is not a valid URL")),
    }
}

pub fn validate(mappings: &[Mapping]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if mappings.is_empty() {
        errors.push(ValidationError {
            entry: "(root)".into(),
            field: "mappings".into(),
            message: "at least one mapping must be defined".into(),
            suggestion: None,
        });
        return Err(errors);
    }

    for (i, mapping) in mappings.iter().enumerate() {
        let entry_id = if mapping.path.is_empty() {
            format!("mappings[{i}]")
        } else {
            mapping.path.clone()
        };

        if let Err(msg) = validate_path(&mapping.path) {
            errors.push(ValidationError {
                entry: entry_id.clone(),
                field: "path".into(),
                message: msg,
                suggestion: if !mapping.path.is_empty() && !mapping.path.starts_with('/') {
                    Some(format!("did you mean '/{}'?", mapping.path))
                } else {
                    None
                },
            });
        }

        if let Err(msg) = validate_target_url(&mapping.url) {
            errors.push(ValidationError {
                entry: entry_id,
                field: "url".into(),
                message: msg,
                suggestion: if mapping.url.is_empty() {
                    Some("remove the entry or give it a target URL".into())
                } else {
                    None
                },
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// One-line summary used by `waypost validate` on success.
#[must_use]
pub fn format_validation_report(path: &str, mappings: &[Mapping]) -> String {
    format!("{path} is valid ({} mappings)", mappings.len())
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
    fn valid_mappings_pass() {
        let mappings = vec![
            mapping("/a", "https://example.com/a"),
            mapping("/b", "http://example.com/b"),
        ];
        assert!(validate(&mappings).is_ok());
    }

    #[test]
    fn empty_document_is_rejected() {
        let errors = validate(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "mappings");
    }

    #[test]
    fn path_without_leading_slash_is_rejected() {
        let errors = validate(&[mapping("docs", "https://example.com")]).unwrap_err();
        assert_eq!(errors[0].field, "path");
        assert!(errors[0].suggestion.as_deref().unwrap().contains("/docs"));
    }

    #[test]
    fn explicit_empty_url_is_rejected() {
        // Construction-time error, not a request-time miss: an entry that can
        // match but not redirect must never reach the served table.
        let errors = validate(&[mapping("/empty", "")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "url");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let errors = validate(&[mapping("/ftp", "ftp://example.com/file")]).unwrap_err();
        assert!(errors[0].message.contains("unsupported scheme"));
    }

    #[test]
    fn duplicate_paths_are_not_an_error() {
        let mappings = vec![
            mapping("/dup", "https://first.example.com"),
            mapping("/dup", "https://second.example.com"),
        ];
        assert!(validate(&mappings).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mappings = vec![mapping("bad", "not a url"), mapping("/ok", "")];
        let errors = validate(&mappings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
