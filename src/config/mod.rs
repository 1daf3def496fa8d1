//! Configuration module for dataset-prep.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, DatasetConfig, StorageConfig, DEFAULT_IMAGE_EXTENSIONS};
pub use modes::TransferMode;
pub use validation::{parse_extensions, require_dir, require_path, validate_config};
