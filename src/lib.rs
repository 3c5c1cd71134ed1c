//! Randclip - random video clip extraction CLI tool.
//!
//! This crate samples fixed-length clips at random positions in a video and
//! exports each as its own MP4 file, using ffmpeg for all media work.

pub mod cli;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod error;
pub mod media;

use clap::Parser;
use cli::Cli;
use clipper::create_random_clips;
use media::{EncodeOptions, FfmpegBackend};
use tracing::info;

pub use error::{Error, FailureKind, Result};

/// Main entry point for randclip CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let settings = cli.clip_settings();
    let backend = FfmpegBackend::new();
    let report = create_random_clips(
        &backend,
        &mut rand::thread_rng(),
        &settings,
        &EncodeOptions::default(),
    )?;

    info!(
        "All {} clips created successfully in {}",
        report.clips.len(),
        settings.output_dir.display()
    );

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
