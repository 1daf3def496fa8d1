//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a pairing run header.
pub fn print_pair_summary(
    image_dir: &str,
    text_dir: &str,
    output_dir: &str,
    transfer_mode: &str,
    dry_run: bool,
) {
    println!();
    println!("{}", style("Pairing:").bold());
    println!("  Images:  {}", image_dir);
    println!("  Texts:   {}", text_dir);
    println!("  Output:  {}", output_dir);
    println!("  Mode:    {}", transfer_mode);
    if dry_run {
        println!("  {}", style("Dry run - no files will be written").yellow());
    }
    println!();
}
