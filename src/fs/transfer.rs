//! File transfer primitives used to materialize matched pairs.

use std::fs;
use std::io;
use std::path::Path;

/// Copy a file, preserving the source modification time.
///
/// An existing destination file is silently overwritten.
pub fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;

    let modified = fs::metadata(from)?.modified()?;
    let dest = fs::OpenOptions::new().write(true).open(to)?;
    dest.set_modified(modified)?;

    Ok(())
}

/// Create a symlink at `to` pointing at `from`.
///
/// The source is canonicalized first: a relative `from` would otherwise be
/// interpreted relative to the link's own directory and dangle. Unlike
/// [`copy_with_metadata`], this fails if `to` already exists.
#[cfg(unix)]
pub fn make_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let target = fs::canonicalize(from)?;
    std::os::unix::fs::symlink(target, to)
}

#[cfg(windows)]
pub fn make_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let target = fs::canonicalize(from)?;
    std::os::windows::fs::symlink_file(target, to)
}
