//! Random interval sampling.

use rand::Rng;

use crate::error::{Error, Result};

/// A clip interval `[start, end)` in source seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRequest {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl ClipRequest {
    /// Length of the interval in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Draw `count` clip intervals uniformly from a source of `source_duration`
/// seconds, sorted by start time.
///
/// Starts are drawn independently from `[0, source_duration - clip_duration]`
/// (both ends inclusive), so clips may overlap or repeat.
///
/// # Errors
///
/// Returns [`Error::InsufficientDuration`] if the source is shorter than one
/// clip. No random values are drawn in that case.
pub fn sample_clip_requests<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    clip_duration: f64,
    source_duration: f64,
) -> Result<Vec<ClipRequest>> {
    if source_duration < clip_duration {
        return Err(Error::InsufficientDuration {
            duration: source_duration,
            required: clip_duration,
        });
    }

    let max_start = source_duration - clip_duration;
    let mut starts: Vec<f64> = (0..count)
        .map(|_| rng.gen_range(0.0..=max_start))
        .collect();
    starts.sort_by(f64::total_cmp);

    // `max_start + clip_duration` can round past the source end.
    Ok(starts
        .into_iter()
        .map(|start| ClipRequest {
            start,
            end: (start + clip_duration).min(source_duration),
        })
        .collect())
}
