//! Image directory scanning and stem mapping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::{file_stem, normalized_extension};

/// A single image file recorded under its stem.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// Filename without extension; the join key against caption files.
    pub stem: String,

    /// Absolute (or as-given) path to the image.
    pub path: PathBuf,

    /// Extension, lowercased and without the dot.
    pub extension: String,
}

impl ImageRecord {
    /// File name including extension.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.stem.clone())
    }
}

/// Result of scanning an image directory.
///
/// Stems are keyed in a sorted map so downstream processing order is
/// deterministic. A stem claimed by more than one image file is moved to
/// `ambiguous` and excluded from pairing entirely.
#[derive(Debug, Default)]
pub struct ImageScan {
    /// Unambiguous stem -> image mapping.
    pub images: BTreeMap<String, ImageRecord>,

    /// Stems claimed by multiple image files, with every claimant path.
    pub ambiguous: BTreeMap<String, Vec<PathBuf>>,

    /// Total image files enumerated, including ambiguous ones.
    pub total_images: usize,
}

/// Scan an image directory (non-recursive) and build the stem mapping.
///
/// `extensions` must already be normalized (lowercase, no leading dot); see
/// [`crate::config::parse_extensions`]. Files whose extension is outside the
/// allow-set, non-regular files, and files with non-UTF-8 stems are skipped.
pub fn scan_images(image_dir: &Path, extensions: &[String]) -> Result<ImageScan> {
    let mut scan = ImageScan::default();

    for entry in std::fs::read_dir(image_dir)? {
        let entry = entry?;
        let path = entry.path();
        // is_file() follows symlinks
        if !path.is_file() {
            continue;
        }

        let ext = match normalized_extension(&path) {
            Some(e) if extensions.iter().any(|allowed| *allowed == e) => e,
            _ => continue,
        };

        let stem = match file_stem(&path) {
            Some(s) => s.to_string(),
            None => {
                tracing::warn!("Skipping file with unreadable name: {}", path.display());
                continue;
            }
        };

        scan.total_images += 1;

        if let Some(paths) = scan.ambiguous.get_mut(&stem) {
            paths.push(path);
            continue;
        }

        if let Some(existing) = scan.images.remove(&stem) {
            tracing::warn!(
                "Stem '{}' claimed by multiple images; excluding from pairing",
                stem
            );
            scan.ambiguous.insert(stem, vec![existing.path, path]);
            continue;
        }

        scan.images.insert(
            stem.clone(),
            ImageRecord {
                stem,
                path,
                extension: ext,
            },
        );
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("cat.png"), b"x").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        fs::write(tmp.path().join("dog.jpg"), b"x").unwrap();

        let scan = scan_images(tmp.path(), &exts(&["png", "jpg"])).unwrap();
        assert_eq!(scan.total_images, 2);
        assert!(scan.images.contains_key("cat"));
        assert!(scan.images.contains_key("dog"));
        assert!(!scan.images.contains_key("notes"));
    }

    #[test]
    fn test_scan_extension_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("IMG.PNG"), b"x").unwrap();

        let scan = scan_images(tmp.path(), &exts(&["png"])).unwrap();
        assert_eq!(scan.images.len(), 1);
        assert_eq!(scan.images["IMG"].extension, "png");
    }

    #[test]
    fn test_scan_duplicate_stems_become_ambiguous() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("cat.png"), b"x").unwrap();
        fs::write(tmp.path().join("cat.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("dog.png"), b"x").unwrap();

        let scan = scan_images(tmp.path(), &exts(&["png", "jpg"])).unwrap();
        assert_eq!(scan.total_images, 3);
        assert!(!scan.images.contains_key("cat"));
        assert_eq!(scan.ambiguous["cat"].len(), 2);
        assert!(scan.images.contains_key("dog"));
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested.png")).unwrap();
        fs::write(tmp.path().join("real.png"), b"x").unwrap();

        let scan = scan_images(tmp.path(), &exts(&["png"])).unwrap();
        assert_eq!(scan.total_images, 1);
        assert!(scan.images.contains_key("real"));
    }
}
