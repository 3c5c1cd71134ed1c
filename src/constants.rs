//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Default number of clips cut from the source.
pub const DEFAULT_CLIP_COUNT: usize = 3;

/// Default clip length in seconds.
pub const DEFAULT_CLIP_DURATION: f64 = 30.0;

/// Default output directory (current working directory).
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Output encoding settings.
pub mod encoding {
    /// Video encoder passed to ffmpeg.
    pub const VIDEO_CODEC: &str = "libx264";

    /// Audio encoder passed to ffmpeg.
    pub const AUDIO_CODEC: &str = "aac";

    /// Output container extension (without dot).
    pub const CONTAINER_EXTENSION: &str = "mp4";

    /// Pixel format for broad player compatibility of H.264 output.
    pub const PIXEL_FORMAT: &str = "yuv420p";

    /// Name of the transient audio track inside the per-write temp directory.
    pub const TEMP_AUDIO_FILE: &str = "temp-audio.m4a";

    /// Prefix for per-write temp directories.
    pub const TEMP_DIR_PREFIX: &str = "randclip-audio-";
}

/// External executables.
pub mod tools {
    /// ffmpeg executable name, resolved via `PATH`.
    pub const FFMPEG: &str = "ffmpeg";

    /// ffprobe executable name, resolved via `PATH`.
    pub const FFPROBE: &str = "ffprobe";
}

/// Process exit codes by failure kind.
pub mod exit_codes {
    /// Invalid arguments (matches clap's usage error code).
    pub const INVALID_SETTINGS: i32 = 2;

    /// Input video does not exist.
    pub const SOURCE_NOT_FOUND: i32 = 3;

    /// Input video is shorter than the requested clip.
    pub const INSUFFICIENT_DURATION: i32 = 4;

    /// Decode, encode or write failure.
    pub const PROCESSING_FAILURE: i32 = 5;
}
