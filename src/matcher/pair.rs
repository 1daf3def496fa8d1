//! The pairing loop: match stems against caption files and materialize pairs.

use std::path::Path;

use crate::config::TransferMode;
use crate::error::{Error, Result};
use crate::fs::{copy_with_metadata, ensure_dir, make_symlink};
use crate::matcher::report::MatchReport;
use crate::matcher::scan::ImageScan;

/// Options controlling one pairing run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairOptions {
    /// How matched pairs are written to the output directory.
    pub transfer_mode: TransferMode,

    /// Stop after materializing this many pairs.
    pub max_pairs: Option<usize>,

    /// Report only; perform no filesystem mutation at all.
    pub dry_run: bool,
}

/// Match scanned images against `{text_dir}/{stem}.txt` candidates and write
/// matched pairs into `output_dir`.
///
/// Processing follows sorted stem order. When the max-pairs limit is hit the
/// loop stops outright: remaining stems are not evaluated and do not appear in
/// the unmatched list. Any transfer failure aborts the run.
pub fn match_pairs(
    scan: &ImageScan,
    text_dir: &Path,
    output_dir: &Path,
    options: PairOptions,
) -> Result<MatchReport> {
    let mut report = MatchReport {
        total_images: scan.total_images,
        ambiguous: scan.ambiguous.keys().cloned().collect(),
        dry_run: options.dry_run,
        ..Default::default()
    };

    if !options.dry_run {
        ensure_dir(output_dir)?;
    }

    for (stem, image) in &scan.images {
        if let Some(limit) = options.max_pairs {
            if report.matched >= limit {
                report.limit_reached = true;
                break;
            }
        }

        let text_path = text_dir.join(format!("{}.txt", stem));
        if !text_path.exists() {
            tracing::debug!("No caption for {}", image.file_name());
            report.unmatched.push(image.file_name());
            continue;
        }

        if options.dry_run {
            tracing::info!(
                "Would {}: {} + {}.txt",
                options.transfer_mode.action(),
                image.file_name(),
                stem
            );
        } else {
            transfer(&image.path, output_dir, options.transfer_mode)?;
            transfer(&text_path, output_dir, options.transfer_mode)?;
            tracing::debug!("Matched: {} <-> {}.txt", image.file_name(), stem);
        }

        report.matched += 1;
    }

    Ok(report)
}

/// Materialize one file into the output directory under its original base name.
fn transfer(source: &Path, output_dir: &Path, mode: TransferMode) -> Result<()> {
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::FileNotFound(source.to_path_buf()))?;
    let dest = output_dir.join(file_name);

    let result = match mode {
        TransferMode::Copy => copy_with_metadata(source, &dest),
        TransferMode::Symlink => make_symlink(source, &dest),
    };

    result.map_err(|e| Error::Transfer {
        action: mode.action(),
        from: source.to_path_buf(),
        to: dest,
        source: e,
    })
}
