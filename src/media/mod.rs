//! Media library seam.
//!
//! Decoding, seeking, encoding and muxing are delegated to an external
//! media library. The clipper only sees these three capabilities:
//! opening a source to learn its duration, extracting an interval, and
//! writing an extracted interval to disk.
//!
//! Resources are released by ownership: dropping a clip frees the
//! per-clip state, dropping a source closes the source handle.

mod ffmpeg;

pub use ffmpeg::{FfmpegBackend, FfmpegClip, FfmpegSource, ProbeInfo, parse_probe_output};

use std::path::Path;

use crate::clipper::ClipRequest;
use crate::constants::encoding;
use crate::error::Result;

/// Opens source videos.
pub trait MediaBackend {
    /// Handle to an opened source.
    type Source: MediaSource;

    /// Open the video at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    fn open(&self, path: &Path) -> Result<Self::Source>;
}

/// An opened source video.
pub trait MediaSource {
    /// Extracted interval, ready to encode.
    type Clip: EncodableClip;

    /// Total duration in seconds.
    fn duration(&self) -> f64;

    /// Extract the interval `[request.start, request.end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval lies outside the source.
    fn extract(&self, request: &ClipRequest) -> Result<Self::Clip>;
}

/// An interval that can be encoded and written to disk.
pub trait EncodableClip {
    /// Encode and write to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write(&self, path: &Path, options: &EncodeOptions) -> Result<()>;
}

/// Output codec and container selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Video encoder name.
    pub video_codec: String,
    /// Audio encoder name.
    pub audio_codec: String,
    /// Container file extension, without the dot.
    pub container_extension: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            video_codec: encoding::VIDEO_CODEC.to_string(),
            audio_codec: encoding::AUDIO_CODEC.to_string(),
            container_extension: encoding::CONTAINER_EXTENSION.to_string(),
        }
    }
}
