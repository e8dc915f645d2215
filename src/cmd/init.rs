//! `waypost init` — generate a starter mapping file.
//!
//! Writes the built-in sample document for the chosen format, so the
//! file `init` produces is exactly what `run` serves when started
//! without `--config`. Refuses to overwrite an existing file.

use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::config;
use crate::error::WaypostError;

pub fn execute(args: &InitArgs) -> Result<(), WaypostError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("waypost.{}", args.format.extension())));

    if output.exists() {
        return Err(WaypostError::FileExists { path: output });
    }

    std::fs::write(&output, config::sample_for(args.format))?;
    println!("Created {}", output.display());
    Ok(())
}
