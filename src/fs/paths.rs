//! Path and directory management.

use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it (and parents) if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Extract the filename stem (name without extension) as a string, if the
/// path has a representable UTF-8 stem.
pub fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Extract the extension, lowercased and without the dot.
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent on an existing directory
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(&PathBuf::from("/data/cat.png")), Some("cat"));
        assert_eq!(file_stem(&PathBuf::from("noext")), Some("noext"));
    }

    #[test]
    fn test_normalized_extension() {
        assert_eq!(
            normalized_extension(&PathBuf::from("IMG.PNG")),
            Some("png".to_string())
        );
        assert_eq!(normalized_extension(&PathBuf::from("noext")), None);
    }
}
