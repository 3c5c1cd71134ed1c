//! Error types for randclip.

use std::path::PathBuf;

use crate::constants::exit_codes;

/// Result type alias for randclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for randclip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input video does not exist.
    #[error("video file '{path}' not found")]
    SourceNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Video is shorter than one clip.
    #[error("video is too short: {duration:.2}s available, need at least {required}s")]
    InsufficientDuration {
        /// Source duration in seconds.
        duration: f64,
        /// Requested clip duration in seconds.
        required: f64,
    },

    /// Operation parameters are out of range.
    #[error("invalid settings: {message}")]
    InvalidSettings {
        /// Description of the validation failure.
        message: String,
    },

    /// External executable is not installed or not on `PATH`.
    #[error("'{tool}' could not be started (is it installed and on PATH?)")]
    ToolNotFound {
        /// Executable name.
        tool: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// External executable exited with a failure status.
    #[error("{tool} failed while processing '{path}'")]
    ToolFailed {
        /// Executable name.
        tool: String,
        /// File being read or written.
        path: PathBuf,
        /// Last diagnostic line printed by the tool.
        #[source]
        source: ToolDiagnostic,
    },

    /// Source could not be probed.
    #[error("failed to read media information from '{path}': {reason}")]
    MediaProbe {
        /// Path to the source file.
        path: PathBuf,
        /// Description of the probe failure.
        reason: String,
    },

    /// Requested interval does not fit inside the source.
    #[error("clip {start:.2}s-{end:.2}s is outside the source duration of {duration:.2}s")]
    ClipOutOfRange {
        /// Requested start in seconds.
        start: f64,
        /// Requested end in seconds.
        end: f64,
        /// Source duration in seconds.
        duration: f64,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the per-clip temp directory.
    #[error("failed to create temporary directory for clip audio")]
    TempDirCreate {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Diagnostic text captured from an external tool's stderr.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ToolDiagnostic(pub String);

/// Coarse failure classification used for exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input path does not resolve to a file.
    SourceNotFound,
    /// Source is shorter than the requested clip duration.
    InsufficientDuration,
    /// Parameters rejected before any work was done.
    InvalidSettings,
    /// Anything surfaced by the decode/extract/encode/write pipeline.
    ProcessingFailure,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::SourceNotFound { .. } => FailureKind::SourceNotFound,
            Self::InsufficientDuration { .. } => FailureKind::InsufficientDuration,
            Self::InvalidSettings { .. } => FailureKind::InvalidSettings,
            Self::ToolNotFound { .. }
            | Self::ToolFailed { .. }
            | Self::MediaProbe { .. }
            | Self::ClipOutOfRange { .. }
            | Self::OutputDirCreateFailed { .. }
            | Self::TempDirCreate { .. }
            | Self::Io(_) => FailureKind::ProcessingFailure,
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind() {
            FailureKind::SourceNotFound => exit_codes::SOURCE_NOT_FOUND,
            FailureKind::InsufficientDuration => exit_codes::INSUFFICIENT_DURATION,
            FailureKind::InvalidSettings => exit_codes::INVALID_SETTINGS,
            FailureKind::ProcessingFailure => exit_codes::PROCESSING_FAILURE,
        }
    }

    /// Render the error and its causes on a single line.
    #[must_use]
    pub fn display_chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
