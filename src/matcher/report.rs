//! Match report produced by a pairing run.

/// Outcome of one pairing invocation.
#[derive(Debug, Default, Clone)]
pub struct MatchReport {
    /// Total image files enumerated in the image directory.
    pub total_images: usize,

    /// Pairs materialized (or that would be, in dry-run mode).
    pub matched: usize,

    /// File names of images with no same-stem caption file.
    pub unmatched: Vec<String>,

    /// Stems claimed by multiple image files, excluded from pairing.
    pub ambiguous: Vec<String>,

    /// Whether the max-pairs limit stopped the run before all stems were
    /// evaluated. Remaining images are neither matched nor unmatched.
    pub limit_reached: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl MatchReport {
    /// Number of images missing a caption counterpart.
    pub fn missing_text(&self) -> usize {
        self.unmatched.len()
    }
}
