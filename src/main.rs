//! Dataset Prep - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dataset_prep::{
    cli::{Args, Command},
    config::{require_dir, require_path, validate_config, Config},
    error::{exit_codes, Error, Result},
    matcher::{match_pairs, scan_images, PairOptions},
    output::{
        create_spinner, print_error, print_info, print_match_report, print_pair_summary,
        print_success, print_upload_stats, print_warning,
    },
    storage::{default_prefix, object_key, upload_dir, upload_file, ObjectStore, S3Store},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::DirectoryNotFound(_) | Error::NotADirectory(_) | Error::FileNotFound(_) => {
                    ExitCode::from(exit_codes::PRECONDITION_ERROR as u8)
                }
                Error::Transfer { .. } => ExitCode::from(exit_codes::TRANSFER_ERROR as u8),
                Error::Upload { .. } => ExitCode::from(exit_codes::UPLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration; a missing file falls back to defaults plus CLI/env
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        if args.config != std::path::PathBuf::from("config.toml") {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config)?;

    // Validate configuration
    validate_config(&config)?;

    match &args.command {
        Command::Pair {
            image_dir,
            text_dir,
            output_dir,
            dry_run,
            ..
        } => {
            // Precondition: both input directories must exist before any work
            require_dir(image_dir)?;
            require_dir(text_dir)?;

            if !config.quiet {
                print_pair_summary(
                    &image_dir.display().to_string(),
                    &text_dir.display().to_string(),
                    &output_dir.display().to_string(),
                    &config.dataset.transfer_mode.to_string(),
                    *dry_run,
                );
            }

            let scan = scan_images(image_dir, &config.dataset.image_extensions)?;
            let report = match_pairs(
                &scan,
                text_dir,
                output_dir,
                PairOptions {
                    transfer_mode: config.dataset.transfer_mode,
                    max_pairs: config.dataset.max_pairs,
                    dry_run: *dry_run,
                },
            )?;

            print_match_report(&report);

            if !config.quiet && !report.dry_run && report.matched > 0 {
                print_success(&format!("Dataset ready at: {}", output_dir.display()));
            }
        }
        Command::Upload { path, key, .. } => {
            // Precondition: the source must exist before any remote round-trip
            require_path(path)?;

            if !config.quiet {
                print_info(&format!("Uploading {}", path.display()));
            }

            let spinner = create_spinner("Connecting to object storage...");
            let store = S3Store::connect(&config.storage).await?;
            spinner.finish_and_clear();

            if path.is_file() {
                let key = match key {
                    Some(k) => k.clone(),
                    None => {
                        let name = path
                            .file_name()
                            .ok_or_else(|| Error::FileNotFound(path.clone()))?;
                        match config.storage.prefix.as_deref() {
                            Some(prefix) => object_key(prefix, Path::new(name)),
                            None => name.to_string_lossy().into_owned(),
                        }
                    }
                };
                upload_file(&store, path, &key).await?;
                print_success(&format!("Uploaded to s3://{}/{}", store.bucket(), key));
            } else if path.is_dir() {
                let prefix = config
                    .storage
                    .prefix
                    .clone()
                    .unwrap_or_else(default_prefix);

                let stats = upload_dir(&store, path, &prefix).await?;
                print_upload_stats(store.bucket(), &prefix, &stats);
            } else {
                return Err(Error::FileNotFound(path.clone()));
            }
        }
    }

    Ok(())
}
