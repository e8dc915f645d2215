//! `waypost validate` — check a mapping file for errors.
//!
//! Parses and validates the mapping file in its declared format,
//! reporting results in either human-readable text or machine-readable
//! JSON.

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::config::{parse_mappings, validation};
use crate::error::WaypostError;

pub fn execute(args: &ValidateArgs) -> Result<(), WaypostError> {
    let path = &args.config;

    if !path.exists() {
        return Err(WaypostError::ConfigFileNotFound { path: path.clone() });
    }

    let content = std::fs::read_to_string(path)?;
    let label = path.display().to_string();
    let mappings = parse_mappings(args.format, &content, &label)?;

    if let Err(errors) = validation::validate(&mappings) {
        match args.output {
            ValidateFormat::Text => {
                eprintln!("\u{2717} {} has {} errors\n", path.display(), errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            ValidateFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "entry": e.entry,
                            "field": e.field,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(WaypostError::ConfigValidation { errors });
    }

    match args.output {
        ValidateFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&label, &mappings)
            );
        }
        ValidateFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "mappings": mappings.len(),
                })
            );
        }
    }

    Ok(())
}
