//! Pair matcher: join image files with same-stem caption files.
//!
//! The scan builds a sorted stem -> image mapping (duplicate stems are
//! rejected and reported as ambiguous); the pairing loop existence-checks
//! `{text_dir}/{stem}.txt` for each stem and copies or symlinks matched
//! pairs into the output directory. Matching is image-driven only: caption
//! files without an image are never reported.

pub mod pair;
pub mod report;
pub mod scan;

pub use pair::{match_pairs, PairOptions};
pub use report::MatchReport;
pub use scan::{scan_images, ImageRecord, ImageScan};
