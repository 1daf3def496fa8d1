//! Upload operations: single files and recursive directory trees.

use std::path::Path;

use chrono::Local;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::output::create_item_bar;
use crate::storage::client::ObjectStore;

/// Counts for one bulk upload run.
#[derive(Debug, Default, Clone, Copy)]
pub struct UploadStats {
    pub uploaded: u64,
    pub failed: u64,
}

/// Build an object key from a prefix and a host-relative path.
///
/// Keys always use forward slashes regardless of the host path separator and
/// never start with a slash.
pub fn object_key(prefix: &str, relative: &Path) -> String {
    let rel: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let rel = rel.join("/");

    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        rel
    } else {
        format!("{}/{}", prefix, rel)
    }
}

/// Timestamped default prefix so repeated pushes do not collide.
pub fn default_prefix() -> String {
    format!("uploads/{}", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Upload one local file under the given key.
pub async fn upload_file<S: ObjectStore + ?Sized>(
    store: &S,
    path: &Path,
    key: &str,
) -> Result<()> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    store.put_file(path, key).await?;
    tracing::debug!("Uploaded: {} -> s3://{}/{}", path.display(), store.bucket(), key);
    Ok(())
}

/// Recursively upload a directory tree, preserving relative paths as key
/// suffixes under `prefix`.
///
/// Files are uploaded strictly sequentially. Per-file failures are logged and
/// counted; the walk continues with the next file.
pub async fn upload_dir<S: ObjectStore + ?Sized>(
    store: &S,
    dir: &Path,
    prefix: &str,
) -> Result<UploadStats> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    let bar = create_item_bar(files.len() as u64, "Uploading");
    let mut stats = UploadStats::default();

    for entry in files {
        let local_path = entry.path();
        // Walk roots at `dir`, so strip_prefix cannot fail here.
        let relative = local_path.strip_prefix(dir).unwrap_or(local_path);
        let key = object_key(prefix, relative);

        match store.put_file(local_path, &key).await {
            Ok(()) => {
                tracing::debug!(
                    "Uploaded: {} -> s3://{}/{}",
                    local_path.display(),
                    store.bucket(),
                    key
                );
                stats.uploaded += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to upload {}: {}", local_path.display(), e);
                stats.failed += 1;
            }
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(stats)
}
