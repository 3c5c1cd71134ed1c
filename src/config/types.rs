//! Settings type definitions.

use crate::constants::{DEFAULT_CLIP_COUNT, DEFAULT_CLIP_DURATION, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Parameters for one clip extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSettings {
    /// Source video file.
    pub input: PathBuf,

    /// Number of clips to cut.
    pub count: usize,

    /// Length of each clip in seconds.
    pub clip_duration: f64,

    /// Directory receiving the output files.
    pub output_dir: PathBuf,
}

impl ClipSettings {
    /// Settings for `input` with default count, duration and output directory.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            count: DEFAULT_CLIP_COUNT,
            clip_duration: DEFAULT_CLIP_DURATION,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
