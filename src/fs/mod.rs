//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Copy and symlink primitives for pair materialization

pub mod paths;
pub mod transfer;

pub use paths::{ensure_dir, file_stem, normalized_extension};
pub use transfer::{copy_with_metadata, make_symlink};
