//! Output file naming.

use std::borrow::Cow;
use std::path::Path;

/// Fallback stem when the source path has no file name.
const DEFAULT_STEM: &str = "video";

/// Generate the output filename for a clip.
///
/// Format: `{source stem}_clip_{index}_{whole start seconds}s.{extension}`
/// Example: `interview_clip_2_73s.mp4`
///
/// `index` is 1-based. The start time is truncated, not rounded.
#[must_use]
pub fn clip_filename(source: &Path, index: usize, start: f64, extension: &str) -> String {
    let stem = source
        .file_stem()
        .map_or(Cow::Borrowed(DEFAULT_STEM), |s| s.to_string_lossy());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole_seconds = start.max(0.0).floor() as u64;

    format!("{stem}_clip_{index}_{whole_seconds}s.{extension}")
}
