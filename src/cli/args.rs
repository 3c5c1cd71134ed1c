//! CLI argument definitions.

use crate::cli::validators::{parse_clip_count, parse_clip_duration};
use crate::config::ClipSettings;
use crate::constants::{DEFAULT_CLIP_COUNT, DEFAULT_CLIP_DURATION, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Cut randomly positioned fixed-length clips out of a video.
#[derive(Debug, Parser)]
#[command(name = "randclip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source video file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of clips to cut.
    #[arg(short = 'n', long, default_value_t = DEFAULT_CLIP_COUNT, value_parser = parse_clip_count)]
    pub count: usize,

    /// Length of each clip in seconds.
    #[arg(short, long, default_value_t = DEFAULT_CLIP_DURATION, value_parser = parse_clip_duration)]
    pub duration: f64,

    /// Directory for the extracted clips.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug incl. ffmpeg commands, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Operation settings described by these arguments.
    #[must_use]
    pub fn clip_settings(&self) -> ClipSettings {
        ClipSettings {
            input: self.input.clone(),
            count: self.count,
            clip_duration: self.duration,
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["randclip", "--input", "talk.mp4"]).unwrap();
        let settings = cli.clip_settings();
        assert_eq!(settings, ClipSettings::new("talk.mp4"));
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "randclip", "-i", "talk.mp4", "-n", "5", "-d", "12.5", "-o", "out", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.count, 5);
        assert_eq!(cli.duration, 12.5);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["randclip"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        assert!(Cli::try_parse_from(["randclip", "-i", "a.mp4", "--count", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_duration() {
        assert!(Cli::try_parse_from(["randclip", "-i", "a.mp4", "--duration=-3"]).is_err());
    }
}
