//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{parse_extensions, Config, TransferMode};
use crate::error::Result;

/// Dataset preparation CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dataset-prep",
    version,
    about = "Prepare image/caption training datasets",
    long_about = "A CLI tool to pair image files with same-stem caption files and to\n\
                  upload prepared datasets to an S3-compatible bucket."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only print warnings and the final summary.
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match images with same-stem .txt captions and copy/symlink pairs.
    Pair {
        /// Directory containing images.
        #[arg(short = 'i', long)]
        image_dir: PathBuf,

        /// Directory containing .txt caption files.
        #[arg(short = 't', long)]
        text_dir: PathBuf,

        /// Output directory for matched pairs.
        #[arg(short = 'o', long)]
        output_dir: PathBuf,

        /// Maximum number of pairs to materialize.
        #[arg(long)]
        max_pairs: Option<usize>,

        /// Comma-separated image extensions to recognize (default: jpg,jpeg,png,gif,bmp,tiff,webp).
        #[arg(short, long)]
        extensions: Option<String>,

        /// Create symlinks instead of copying (saves space).
        #[arg(long)]
        symlink: bool,

        /// Report what would be done without touching the filesystem.
        #[arg(long)]
        dry_run: bool,
    },

    /// Upload a file or directory tree to the configured bucket.
    Upload {
        /// Local file or directory to upload.
        path: PathBuf,

        /// Object key for a single-file upload (defaults to the file name).
        #[arg(short, long)]
        key: Option<String>,

        /// Key prefix for directory uploads (defaults to a timestamped prefix).
        #[arg(short, long)]
        prefix: Option<String>,

        /// Target bucket name.
        #[arg(short, long, env = "S3_BUCKET_NAME")]
        bucket: Option<String>,

        /// AWS region.
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,

        /// Custom endpoint URL for S3-compatible stores.
        #[arg(long, env = "S3_ENDPOINT_URL")]
        endpoint: Option<String>,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// Storage credentials are resolved here, once, from the process
    /// environment; nothing downstream reads environment variables.
    pub fn merge_into_config(&self, config: &mut Config) -> Result<()> {
        if self.quiet {
            config.quiet = true;
        }

        match &self.command {
            Command::Pair {
                max_pairs,
                extensions,
                symlink,
                ..
            } => {
                if let Some(limit) = max_pairs {
                    config.dataset.max_pairs = Some(*limit);
                }

                if let Some(list) = extensions {
                    config.dataset.image_extensions = parse_extensions(list)?;
                }

                if *symlink {
                    config.dataset.transfer_mode = TransferMode::Symlink;
                }
            }
            Command::Upload {
                bucket,
                region,
                endpoint,
                prefix,
                ..
            } => {
                if let Some(bucket) = bucket {
                    config.storage.bucket = Some(bucket.clone());
                }

                if let Some(region) = region {
                    config.storage.region = Some(region.clone());
                }

                if let Some(endpoint) = endpoint {
                    config.storage.endpoint = Some(endpoint.clone());
                }

                if let Some(prefix) = prefix {
                    config.storage.prefix = Some(prefix.clone());
                }

                config.storage.access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok();
                config.storage.secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_pair_flags_merge() {
        let args = Args::parse_from([
            "dataset-prep",
            "pair",
            "-i",
            "imgs",
            "-t",
            "texts",
            "-o",
            "out",
            "--max-pairs",
            "5",
            "--extensions",
            "png,JPG",
            "--symlink",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config).unwrap();

        assert_eq!(config.dataset.max_pairs, Some(5));
        assert_eq!(config.dataset.image_extensions, vec!["png", "jpg"]);
        assert_eq!(config.dataset.transfer_mode, TransferMode::Symlink);
    }

    #[test]
    fn test_quiet_flag_merges() {
        let args = Args::parse_from([
            "dataset-prep", "--quiet", "pair", "-i", "imgs", "-t", "texts", "-o", "out",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config).unwrap();
        assert!(config.quiet);

        // Absent flag leaves a config-file setting untouched
        let args = Args::parse_from([
            "dataset-prep", "pair", "-i", "imgs", "-t", "texts", "-o", "out",
        ]);
        let mut config = Config {
            quiet: true,
            ..Default::default()
        };
        args.merge_into_config(&mut config).unwrap();
        assert!(config.quiet);
    }

    #[test]
    fn test_upload_flags_merge() {
        let args = Args::parse_from([
            "dataset-prep",
            "upload",
            "train/",
            "--bucket",
            "training-data",
            "--prefix",
            "lineart",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config).unwrap();

        assert_eq!(config.storage.bucket.as_deref(), Some("training-data"));
        assert_eq!(config.storage.prefix.as_deref(), Some("lineart"));
    }
}
