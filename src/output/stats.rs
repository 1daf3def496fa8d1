//! Summary reporting.

use console::style;

use crate::matcher::MatchReport;
use crate::storage::UploadStats;

/// Upper bound on names shown in the unmatched and ambiguous listings.
const MAX_LISTED_NAMES: usize = 10;

/// Print the final match report.
pub fn print_match_report(report: &MatchReport) {
    println!();
    println!("{}", style("Summary:").bold());
    println!("  Total images found: {}", report.total_images);
    println!("  Matched pairs:      {}", style(report.matched).green());
    println!("  Missing text files: {}", report.missing_text());
    if !report.ambiguous.is_empty() {
        println!(
            "  Ambiguous stems:    {}",
            style(report.ambiguous.len()).yellow()
        );
    }
    if report.limit_reached {
        println!("  {}", style("Pair limit reached; remaining images skipped").yellow());
    }
    if report.dry_run {
        println!("  {}", style("Dry run - no files were written").yellow());
    }

    print_name_list("Unmatched image files:", &report.unmatched);
    print_name_list("Ambiguous stems (multiple images share a name):", &report.ambiguous);
}

/// Print global statistics for a bulk upload.
pub fn print_upload_stats(bucket: &str, prefix: &str, stats: &UploadStats) {
    println!();
    println!("{}", style("Upload summary:").bold());
    println!("  Destination: s3://{}/{}", bucket, prefix);
    println!("  Uploaded:    {}", style(stats.uploaded).green());
    if stats.failed > 0 {
        println!("  Failed:      {}", style(stats.failed).red());
    }
}

fn print_name_list(header: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }

    println!();
    println!("{}", header);
    for name in names.iter().take(MAX_LISTED_NAMES) {
        println!("  - {}", name);
    }
    if names.len() > MAX_LISTED_NAMES {
        println!("  ... and {} more", names.len() - MAX_LISTED_NAMES);
    }
}
