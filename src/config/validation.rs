//! Configuration validation logic.

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the configuration shared by all subcommands.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.dataset.image_extensions.is_empty() {
        return Err(Error::ConfigValidation {
            field: "image_extensions".to_string(),
            message: "At least one image extension is required".to_string(),
        });
    }

    for ext in &config.dataset.image_extensions {
        if ext.is_empty() {
            return Err(Error::ConfigValidation {
                field: "image_extensions".to_string(),
                message: "Empty extension in allow-list".to_string(),
            });
        }
    }

    if let Some(0) = config.dataset.max_pairs {
        return Err(Error::ConfigValidation {
            field: "max_pairs".to_string(),
            message: "max_pairs must be at least 1 when set".to_string(),
        });
    }

    Ok(())
}

/// Parse a comma-separated extension list into normalized form
/// (lowercase, leading dot stripped, empty entries skipped).
pub fn parse_extensions(input: &str) -> Result<Vec<String>> {
    let extensions: Vec<String> = input
        .split(',')
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    if extensions.is_empty() {
        return Err(Error::ConfigValidation {
            field: "extensions".to_string(),
            message: format!("No extensions found in '{}'", input),
        });
    }

    Ok(extensions)
}

/// Check that a required input directory exists before any work begins.
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Check that an upload source exists before any remote connection is made.
pub fn require_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}
