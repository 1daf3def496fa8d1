//! Configuration structures and loading logic.

use crate::config::modes::TransferMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default recognized image extensions (lowercase, no dot).
pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 7] =
    ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Only print warnings and the final summary.
    #[serde(default)]
    pub quiet: bool,
}

/// Pair-matching options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Recognized image extensions (lowercase, without leading dot).
    #[serde(default = "default_extensions")]
    pub image_extensions: Vec<String>,

    /// Maximum number of pairs to materialize (None for all).
    #[serde(default)]
    pub max_pairs: Option<usize>,

    /// How pairs are written to the output directory.
    #[serde(default)]
    pub transfer_mode: TransferMode,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            image_extensions: default_extensions(),
            max_pairs: None,
            transfer_mode: TransferMode::default(),
        }
    }
}

/// Object-storage connection settings.
///
/// Credentials are resolved once, at load time, from CLI flags, the config file,
/// or process environment; the uploader only ever sees this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Target bucket name.
    #[serde(default)]
    pub bucket: Option<String>,

    /// AWS region.
    #[serde(default)]
    pub region: Option<String>,

    /// Custom endpoint URL (MinIO and other S3-compatible stores).
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Key prefix prepended to every uploaded object.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Explicit access key ID. Falls back to the SDK's environment chain when unset.
    #[serde(skip)]
    pub access_key_id: Option<String>,

    /// Explicit secret access key. Falls back to the SDK's environment chain when unset.
    #[serde(skip)]
    pub secret_access_key: Option<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = DatasetConfig::default();
        assert_eq!(config.image_extensions.len(), 7);
        assert!(config.image_extensions.iter().any(|e| e == "webp"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [dataset]
            image_extensions = ["png", "jpg"]
            max_pairs = 500
            transfer_mode = "symlink"

            [storage]
            bucket = "training-data"
            region = "us-east-1"
            prefix = "lineart"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.image_extensions, vec!["png", "jpg"]);
        assert_eq!(config.dataset.max_pairs, Some(500));
        assert_eq!(config.dataset.transfer_mode, TransferMode::Symlink);
        assert_eq!(config.storage.bucket.as_deref(), Some("training-data"));
        assert_eq!(config.storage.prefix.as_deref(), Some("lineart"));
    }

}
