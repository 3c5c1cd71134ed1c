//! Clip command execution.

use std::fs;
use std::path::PathBuf;

use rand::Rng;
use tracing::{info, warn};

use crate::config::{ClipSettings, validate_settings};
use crate::error::{Error, Result};
use crate::media::{EncodableClip, EncodeOptions, MediaBackend, MediaSource};

use super::{ClipRequest, clip_filename, sample_clip_requests};

/// A clip that was written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedClip {
    /// 1-based position in start order.
    pub index: usize,
    /// Interval taken from the source.
    pub request: ClipRequest,
    /// Output file.
    pub path: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipReport {
    /// Source video.
    pub source: PathBuf,
    /// Source duration in seconds.
    pub source_duration: f64,
    /// Exported clips in ascending start order.
    pub clips: Vec<ExportedClip>,
}

/// Cut `settings.count` randomly placed clips of `settings.clip_duration`
/// seconds out of `settings.input`.
///
/// Clips are extracted and written one at a time in ascending start order;
/// each extracted clip is released before the next is requested. The source
/// handle is released on every exit path. Clips written before a failure are
/// left on disk.
///
/// # Errors
///
/// - [`Error::InvalidSettings`] for a zero count or non-positive duration.
/// - [`Error::SourceNotFound`] if the input is not a file; the backend is
///   never opened.
/// - [`Error::InsufficientDuration`] if the source is shorter than one clip;
///   nothing is extracted.
/// - Any backend or filesystem error while probing, extracting or writing.
pub fn create_random_clips<B, R>(
    backend: &B,
    rng: &mut R,
    settings: &ClipSettings,
    options: &EncodeOptions,
) -> Result<ClipReport>
where
    B: MediaBackend,
    R: Rng + ?Sized,
{
    validate_settings(settings)?;

    if !settings.input.is_file() {
        return Err(Error::SourceNotFound {
            path: settings.input.clone(),
        });
    }

    info!("Loading video {}", settings.input.display());
    let source = backend.open(&settings.input)?;
    let source_duration = source.duration();
    info!("Video duration: {source_duration:.2} seconds");

    let requests = sample_clip_requests(
        rng,
        settings.count,
        settings.clip_duration,
        source_duration,
    )?;

    fs::create_dir_all(&settings.output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: settings.output_dir.clone(),
        source: e,
    })?;

    let mut clips = Vec::with_capacity(requests.len());

    for (index, request) in (1..).zip(requests) {
        info!(
            "Creating clip {index}: {:.2}s - {:.2}s",
            request.start, request.end
        );

        let clip = source.extract(&request)?;

        let filename = clip_filename(
            &settings.input,
            index,
            request.start,
            &options.container_extension,
        );
        let path = settings.output_dir.join(filename);
        if path.exists() {
            warn!("Overwriting existing file {}", path.display());
        }

        clip.write(&path, options)?;
        drop(clip);

        info!("Saved: {}", path.display());
        clips.push(ExportedClip {
            index,
            request,
            path,
        });
    }

    drop(source);

    Ok(ClipReport {
        source: settings.input.clone(),
        source_duration,
        clips,
    })
}
