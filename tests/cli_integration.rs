//! Integration tests for the randclip binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_missing_input_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.mp4");

    let mut cmd = cargo_bin_cmd!("randclip");
    cmd.arg("--input")
        .arg(&missing)
        .arg("--output-dir")
        .arg(temp_dir.path().join("clips"));

    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));

    assert!(!temp_dir.path().join("clips").exists());
}

#[test]
fn test_input_is_required() {
    let mut cmd = cargo_bin_cmd!("randclip");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_zero_count_rejected() {
    let mut cmd = cargo_bin_cmd!("randclip");
    cmd.args(["--input", "video.mp4", "--count", "0"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("clip count must be at least 1"));
}

#[test]
fn test_non_numeric_duration_rejected() {
    let mut cmd = cargo_bin_cmd!("randclip");
    cmd.args(["--input", "video.mp4", "--duration", "half"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_unreadable_video_is_processing_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.mp4");
    std::fs::write(&input, "this is plain text, not a video").unwrap();

    let mut cmd = cargo_bin_cmd!("randclip");
    cmd.arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(temp_dir.path().join("clips"));

    // Fails whether or not ffprobe is installed: either it cannot be
    // started or it cannot parse the file.
    cmd.assert()
        .code(5)
        .stderr(predicate::str::starts_with("error: "));

    assert!(!temp_dir.path().join("clips").exists());
}

#[test]
fn test_help_lists_flags() {
    let mut cmd = cargo_bin_cmd!("randclip");
    cmd.arg("--help");

    cmd.assert().success().stdout(
        predicate::str::contains("--count")
            .and(predicate::str::contains("--duration"))
            .and(predicate::str::contains("--output-dir")),
    );
}
