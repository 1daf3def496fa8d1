//! Object-storage module.
//!
//! Provides:
//! - The [`ObjectStore`] trait and its S3 implementation
//! - Single-file, byte-buffer, and recursive directory uploads

pub mod client;
pub mod upload;

pub use client::{ObjectStore, S3Store};
pub use upload::{default_prefix, object_key, upload_dir, upload_file, UploadStats};
