//! Media backend driving the system `ffprobe` and `ffmpeg` executables.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use super::{EncodableClip, EncodeOptions, MediaBackend, MediaSource};
use crate::clipper::ClipRequest;
use crate::constants::{encoding, tools};
use crate::error::{Error, Result, ToolDiagnostic};

/// Media backend using ffprobe for probing and ffmpeg for encoding.
#[derive(Debug, Clone)]
pub struct FfmpegBackend {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl FfmpegBackend {
    /// Backend using `ffmpeg` and `ffprobe` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tools(tools::FFMPEG, tools::FFPROBE)
    }

    /// Backend using explicit executable paths.
    #[must_use]
    pub fn with_tools(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }
}

impl Default for FfmpegBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaBackend for FfmpegBackend {
    type Source = FfmpegSource;

    fn open(&self, path: &Path) -> Result<FfmpegSource> {
        let mut cmd = Command::new(&self.ffprobe);
        cmd.args([
            "-v",
            "error",
            "-show_entries",
            "format=duration:stream=codec_type",
            "-of",
            "default=noprint_wrappers=1",
        ])
        .arg(path);

        let output = run_tool(cmd, &self.ffprobe, path)?;
        let info = parse_probe_output(&String::from_utf8_lossy(&output.stdout)).map_err(
            |reason| Error::MediaProbe {
                path: path.to_path_buf(),
                reason,
            },
        )?;

        debug!(
            "Probed {}: duration={:.3}s audio={}",
            path.display(),
            info.duration,
            info.has_audio
        );

        Ok(FfmpegSource {
            ffmpeg: self.ffmpeg.clone(),
            path: path.to_path_buf(),
            info,
        })
    }
}

/// Stream facts read from ffprobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeInfo {
    /// Container duration in seconds.
    pub duration: f64,
    /// Whether the source carries at least one audio stream.
    pub has_audio: bool,
}

/// Parse `ffprobe -of default=noprint_wrappers=1` output.
///
/// Expects `key=value` lines; `duration` is required and must be a
/// positive finite number, `codec_type=audio` marks an audio stream.
///
/// # Errors
///
/// Returns a description of the problem if no usable duration is present.
pub fn parse_probe_output(stdout: &str) -> std::result::Result<ProbeInfo, String> {
    let mut duration = None;
    let mut has_audio = false;

    for line in stdout.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("duration=") {
            duration = Some(
                value
                    .parse::<f64>()
                    .map_err(|_| format!("unreadable duration '{value}'"))?,
            );
        } else if line == "codec_type=audio" {
            has_audio = true;
        }
    }

    let duration = duration.ok_or_else(|| "no duration reported".to_string())?;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(format!("invalid duration {duration}"));
    }

    Ok(ProbeInfo {
        duration,
        has_audio,
    })
}

/// A probed source file.
#[derive(Debug)]
pub struct FfmpegSource {
    ffmpeg: PathBuf,
    path: PathBuf,
    info: ProbeInfo,
}

impl MediaSource for FfmpegSource {
    type Clip = FfmpegClip;

    fn duration(&self) -> f64 {
        self.info.duration
    }

    fn extract(&self, request: &ClipRequest) -> Result<FfmpegClip> {
        if request.start < 0.0 || request.end <= request.start || request.end > self.info.duration
        {
            return Err(Error::ClipOutOfRange {
                start: request.start,
                end: request.end,
                duration: self.info.duration,
            });
        }

        Ok(FfmpegClip {
            ffmpeg: self.ffmpeg.clone(),
            source: self.path.clone(),
            start: request.start,
            end: request.end,
            has_audio: self.info.has_audio,
        })
    }
}

/// An interval of a source file, encoded on [`EncodableClip::write`].
#[derive(Debug)]
pub struct FfmpegClip {
    ffmpeg: PathBuf,
    source: PathBuf,
    start: f64,
    end: f64,
    has_audio: bool,
}

impl FfmpegClip {
    fn ffmpeg_command(&self) -> Command {
        let mut cmd = Command::new(&self.ffmpeg);
        cmd.args(["-hide_banner", "-loglevel", "error", "-y"])
            .stdin(Stdio::null());
        cmd
    }

    fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Input-side seek into the source.
    fn push_source_input(&self, cmd: &mut Command) {
        cmd.arg("-ss")
            .arg(format_seconds(self.start))
            .arg("-i")
            .arg(&self.source);
    }

    /// Output-side length bound; must follow every `-i`.
    fn push_output_length(&self, cmd: &mut Command) {
        cmd.arg("-t").arg(format_seconds(self.length()));
    }

    fn push_video_codec(cmd: &mut Command, options: &EncodeOptions) {
        cmd.arg("-c:v")
            .arg(&options.video_codec)
            .arg("-pix_fmt")
            .arg(encoding::PIXEL_FORMAT);
    }
}

impl EncodableClip for FfmpegClip {
    fn write(&self, path: &Path, options: &EncodeOptions) -> Result<()> {
        if !self.has_audio {
            let mut cmd = self.ffmpeg_command();
            self.push_source_input(&mut cmd);
            self.push_output_length(&mut cmd);
            cmd.args(["-map", "0:v:0", "-an"]);
            Self::push_video_codec(&mut cmd, options);
            cmd.arg(path);
            run_tool(cmd, &self.ffmpeg, path)?;
            return Ok(());
        }

        // Removed on drop, including every early return below.
        let temp_dir = tempfile::Builder::new()
            .prefix(encoding::TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(|source| Error::TempDirCreate { source })?;
        let temp_audio = temp_dir.path().join(encoding::TEMP_AUDIO_FILE);

        let mut cmd = self.ffmpeg_command();
        self.push_source_input(&mut cmd);
        self.push_output_length(&mut cmd);
        cmd.args(["-map", "0:a:0", "-vn", "-c:a"])
            .arg(&options.audio_codec)
            .arg(&temp_audio);
        run_tool(cmd, &self.ffmpeg, &temp_audio)?;

        let mut cmd = self.ffmpeg_command();
        self.push_source_input(&mut cmd);
        cmd.arg("-i")
            .arg(&temp_audio)
            .args(["-map", "0:v:0", "-map", "1:a:0"]);
        self.push_output_length(&mut cmd);
        Self::push_video_codec(&mut cmd, options);
        cmd.args(["-c:a", "copy"]).arg(path);
        run_tool(cmd, &self.ffmpeg, path)?;

        Ok(())
    }
}

/// Run an external tool to completion, mapping failures to crate errors.
fn run_tool(mut cmd: Command, tool: &Path, target: &Path) -> Result<Output> {
    debug!("Running {cmd:?}");

    let output = cmd.output().map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::ToolNotFound {
                tool: tool.display().to_string(),
                source,
            }
        } else {
            Error::Io(source)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = last_diagnostic_line(&stderr)
            .map_or_else(|| format!("exited with {}", output.status), str::to_string);
        return Err(Error::ToolFailed {
            tool: tool.display().to_string(),
            path: target.to_path_buf(),
            source: ToolDiagnostic(diagnostic),
        });
    }

    Ok(output)
}

/// Last non-empty line of a tool's stderr.
fn last_diagnostic_line(stderr: &str) -> Option<&str> {
    stderr.lines().map(str::trim).rfind(|line| !line.is_empty())
}

/// Format seconds for ffmpeg time options.
fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.6}")
}
