//! Error types for the dataset-prep application.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Precondition errors (checked before any work begins)
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    // Pair materialization errors
    #[error("Failed to {action} '{}' -> '{}': {source}", .from.display(), .to.display())]
    Transfer {
        action: &'static str,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Object storage errors
    #[error("Upload failed for '{key}': {message}")]
    Upload { key: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const PRECONDITION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const TRANSFER_ERROR: i32 = 4;
    pub const UPLOAD_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
