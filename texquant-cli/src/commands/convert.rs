//! Convert command - quantize PNG textures.

use std::path::PathBuf;

use clap::Args;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use texquant::config::{format_size, ConfigFile};
use texquant::convert::{find_png_assets, BatchConverter};

use super::common::{resolve_mode, ModeArg};
use crate::error::CliError;

/// Arguments for the convert command.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// PNG files or directories to convert
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Quantization mode (overrides the config file)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write converted files here instead of overwriting in place
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU core)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Skip the overwrite confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    // Resolve settings: CLI > config > default
    let mode = resolve_mode(args.mode, &config);
    let threads = args.threads.unwrap_or(config.convert.threads);
    let output_dir = args.output.or_else(|| config.convert.output_dir.clone());

    let files = find_png_assets(&args.paths).map_err(CliError::Discovery)?;
    debug!(files = files.len(), mode = mode.name(), "Resolved input paths");
    if files.is_empty() {
        println!("No PNG files found.");
        return Ok(());
    }

    println!("TexQuant v{}", texquant::VERSION);
    println!("Mode:   {}", mode.name());
    match &output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: overwrite in place"),
    }
    println!("Files:  {}", files.len());
    println!();

    // Quantization is lossy; converting in place destroys the originals
    if output_dir.is_none() && !args.yes && !confirm_overwrite(files.len())? {
        println!("Aborted.");
        return Ok(());
    }

    let mut converter = BatchConverter::new(mode).with_threads(threads);
    if let Some(dir) = &output_dir {
        converter = converter.with_output_dir(dir);
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());
    let summary = converter
        .run_with(&files, |_| progress.inc(1))
        .map_err(CliError::Convert)?;
    progress.finish_and_clear();

    println!(
        "Converted {} file(s), {} written",
        summary.converted,
        format_size(summary.bytes_written as usize)
    );

    if summary.failed > 0 {
        println!();
        println!("{} file(s) failed:", summary.failed);
        for (path, error) in &summary.failures {
            println!("  {}: {}", path.display(), error);
        }
        return Err(CliError::PartialFailure {
            failed: summary.failed,
        });
    }

    Ok(())
}

/// Ask the user to confirm an in-place overwrite.
fn confirm_overwrite(count: usize) -> Result<bool, CliError> {
    Confirm::new()
        .with_prompt(format!(
            "{} file(s) will be quantized and overwritten in place. Continue?",
            count
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::Prompt(e.to_string()))
}
