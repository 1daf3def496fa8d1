//! Dataset Prep - training dataset preparation utilities
//!
//! This library pairs image files with same-stem caption files and uploads
//! prepared datasets to S3-compatible object storage.
//!
//! # Features
//!
//! - Stem-based image/caption pair matching
//! - Copy or symlink materialization of matched pairs
//! - Dry-run reporting without filesystem mutation
//! - Configurable image extension allow-list
//! - Single-file, byte-buffer, and recursive directory uploads to S3
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dataset_prep::matcher::{match_pairs, scan_images, PairOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extensions = vec!["png".to_string(), "jpg".to_string()];
//!     let scan = scan_images(Path::new("images"), &extensions)?;
//!     let report = match_pairs(
//!         &scan,
//!         Path::new("captions"),
//!         Path::new("training_data"),
//!         PairOptions::default(),
//!     )?;
//!     println!("matched {} pairs", report.matched);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod matcher;
pub mod output;
pub mod storage;

// Re-exports for convenience
pub use config::{Config, TransferMode};
pub use error::{Error, Result};
pub use matcher::{match_pairs, scan_images, MatchReport, PairOptions};
pub use storage::{upload_dir, upload_file, ObjectStore, S3Store};
