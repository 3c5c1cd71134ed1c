//! Settings validation.

use crate::config::ClipSettings;
use crate::error::{Error, Result};

/// Validate numeric settings before any file is touched.
///
/// Input existence is not checked here; a missing source is reported
/// separately as [`Error::SourceNotFound`].
pub fn validate_settings(settings: &ClipSettings) -> Result<()> {
    if settings.count == 0 {
        return Err(Error::InvalidSettings {
            message: "clip count must be at least 1".to_string(),
        });
    }

    if !settings.clip_duration.is_finite() || settings.clip_duration <= 0.0 {
        return Err(Error::InvalidSettings {
            message: format!(
                "clip duration must be a positive number of seconds, got {}",
                settings.clip_duration
            ),
        });
    }

    Ok(())
}
