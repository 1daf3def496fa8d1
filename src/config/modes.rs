//! Transfer mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How matched pairs are materialized into the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Duplicate file content, preserving the source modification time (default).
    #[default]
    Copy,
    /// Create symlinks pointing at the originals instead of copying.
    Symlink,
}

impl TransferMode {
    /// Verb used in log lines and error messages.
    pub fn action(&self) -> &'static str {
        match self {
            TransferMode::Copy => "copy",
            TransferMode::Symlink => "symlink",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::Copy => write!(f, "copy"),
            TransferMode::Symlink => write!(f, "symlink"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(TransferMode::Copy),
            "symlink" => Ok(TransferMode::Symlink),
            _ => Err(format!("Unknown transfer mode: {}", s)),
        }
    }
}
