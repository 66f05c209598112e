// ============================================================================
// vidslider-core/src/invert.rs
// ============================================================================
//
// COLOR INVERSION DEMO: Negated Clip Paired With Its Source
//
// Runs ffmpeg's `negate` filter over a clip and pairs the result with the
// original for display in the comparison slider. When inversion fails the
// demo shows the original on both sides instead of failing the whole call.
//
// AI-ASSISTANT-INFO: Demo wiring of the comparison payload to an ffmpeg filter

use crate::config::{INVERT_TIMEOUT, VIDEO_CODEC};
use crate::error::{CoreError, CoreResult};
use crate::external::{EncoderLocation, FfmpegSpawner, run_with_deadline};
use crate::payload::{VideoPair, VideoRef};
use crate::temp_files;

use ffmpeg_sidecar::command::FfmpegCommand;
use log::{debug, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the inverted clip inside its scratch directory.
pub const INVERTED_FILE_NAME: &str = "inverted_video.mp4";

/// Arguments for a color-inverted H.264/AAC re-encode of `input`.
#[must_use]
pub fn invert_args(input: &str, output_path: &Path) -> Vec<String> {
    let mut args: Vec<String> = ["-y", "-i", input, "-vf", "negate", "-c:v", VIDEO_CODEC]
        .iter()
        .chain(&["-preset", "fast", "-crf", "23", "-c:a", "aac"])
        .map(ToString::to_string)
        .collect();
    args.push(output_path.to_string_lossy().into_owned());
    args
}

/// Writes a color-inverted copy of `input` to `output_path`, giving up after
/// [`INVERT_TIMEOUT`].
///
/// # Errors
///
/// - `Io` (not found) if a local `input` does not exist
/// - `EncoderUnavailable` if the encoder cannot be located
/// - `EncoderExecutionFailed` if the encoder fails, times out or produces
///   no output
pub fn invert<S: FfmpegSpawner>(
    spawner: &S,
    encoder: &EncoderLocation,
    input: &VideoRef,
    output_path: &Path,
) -> CoreResult<PathBuf> {
    invert_with_timeout(spawner, encoder, input, output_path, INVERT_TIMEOUT)
}

/// [`invert`] with an explicit time limit.
///
/// # Errors
///
/// See [`invert`].
pub fn invert_with_timeout<S: FfmpegSpawner>(
    spawner: &S,
    encoder: &EncoderLocation,
    input: &VideoRef,
    output_path: &Path,
    timeout: Duration,
) -> CoreResult<PathBuf> {
    if let VideoRef::Path(path) = input {
        if !path.exists() {
            return Err(CoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("input video not found: {}", path.display()),
            )));
        }
    }
    let encoder_path = encoder.resolve()?;

    let staged = temp_files::staging_path_for(output_path)?;
    let args = invert_args(&input.to_string(), &staged);
    debug!("Running: {} {}", encoder_path.display(), args.join(" "));

    let mut cmd = FfmpegCommand::new_with_path(&encoder_path);
    cmd.args(&args);

    let process = spawner.spawn(cmd)?;
    run_with_deadline(process, timeout, |_| {})?;

    if !std::fs::metadata(&staged).is_ok_and(|m| m.len() > 0) {
        return Err(CoreError::EncoderExecutionFailed {
            exit_code: Some(0),
            output: format!("no output was produced for {}", output_path.display()),
        });
    }
    temp_files::commit_staged(staged, output_path)?;

    info!("Video inversion successful! Output: {}", output_path.display());
    Ok(output_path.to_path_buf())
}

/// Inverts `input` into a fresh scratch directory that is kept on success.
///
/// # Errors
///
/// See [`invert`]; the scratch directory is removed on failure.
pub fn invert_to_temp<S: FfmpegSpawner>(
    spawner: &S,
    encoder: &EncoderLocation,
    input: &VideoRef,
) -> CoreResult<PathBuf> {
    let dir = temp_files::create_temp_dir("vidslider_invert_")?;
    invert(spawner, encoder, input, &dir.path().join(INVERTED_FILE_NAME))?;
    Ok(temp_files::keep_temp_dir(dir).join(INVERTED_FILE_NAME))
}

/// Pairs the left video of `pair` with its inverted copy.
///
/// The inverted clip is written to `output_path`, or to a fresh scratch
/// directory when `None`. A missing pair or a missing left side is returned
/// unchanged. If inversion fails, the original is shown on both sides.
pub fn invert_pair<S: FfmpegSpawner>(
    spawner: &S,
    encoder: &EncoderLocation,
    pair: Option<&VideoPair>,
    output_path: Option<&Path>,
) -> Option<VideoPair> {
    let pair = pair?;
    let Some(original) = pair.left.clone() else {
        warn!("No original video found");
        return Some(pair.clone());
    };

    info!("Starting video inversion of {}", original);
    let inverted = match output_path {
        Some(path) => invert(spawner, encoder, &original, path),
        None => invert_to_temp(spawner, encoder, &original),
    };
    match inverted {
        Ok(inverted) => Some(VideoPair::new(
            Some(original),
            Some(VideoRef::Path(inverted)),
        )),
        Err(e) => {
            warn!("Inversion failed, showing the original on both sides: {}", e);
            Some(VideoPair::new(Some(original.clone()), Some(original)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::{MOCK_OUTPUT, MockFfmpegSpawner};
    use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
    use tempfile::tempdir;

    fn fake_encoder() -> EncoderLocation {
        EncoderLocation::Resolved(PathBuf::from("/usr/bin/ffmpeg"))
    }

    #[test]
    fn test_invert_args() {
        let args = invert_args("in.mp4", Path::new("out.mp4"));
        assert_eq!(
            args,
            [
                "-y", "-i", "in.mp4", "-vf", "negate", "-c:v", "libx264", "-preset", "fast",
                "-crf", "23", "-c:a", "aac", "out.mp4",
            ]
        );
    }

    #[test]
    fn test_invert_pair_success() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("green.mp4");
        std::fs::write(&input, b"dummy")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        let pair = VideoPair::new(Some(VideoRef::Path(input.clone())), None);
        let result = invert_pair(&spawner, &fake_encoder(), Some(&pair), None).unwrap();

        assert_eq!(result.left, Some(VideoRef::Path(input)));
        let Some(VideoRef::Path(inverted)) = result.right else {
            panic!("right side should be the inverted file");
        };
        assert!(inverted.ends_with(INVERTED_FILE_NAME));
        assert!(inverted.exists());
        if let Some(dir) = inverted.parent() {
            std::fs::remove_dir_all(dir)?;
        }
        Ok(())
    }

    #[test]
    fn test_invert_pair_falls_back_to_original() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("green.mp4");
        std::fs::write(&input, b"dummy")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_expectation(1, vec![], true);

        let original = VideoRef::Path(input);
        let pair = VideoPair::new(Some(original.clone()), None);
        let result = invert_pair(&spawner, &fake_encoder(), Some(&pair), None).unwrap();
        assert_eq!(result, VideoPair::new(Some(original.clone()), Some(original)));
        Ok(())
    }

    #[test]
    fn test_invert_pair_to_explicit_output() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("red.mp4");
        let output = tmp.path().join("out").join("red_inverted.mp4");
        std::fs::write(&input, b"dummy")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        let pair = VideoPair::new(Some(VideoRef::Path(input.clone())), None);
        let result = invert_pair(&spawner, &fake_encoder(), Some(&pair), Some(&output)).unwrap();
        assert_eq!(
            result,
            VideoPair::new(Some(VideoRef::Path(input)), Some(VideoRef::Path(output)))
        );
        Ok(())
    }

    #[test]
    fn test_invert_pair_passes_through_empty_input() {
        let spawner = MockFfmpegSpawner::new();
        assert_eq!(invert_pair(&spawner, &fake_encoder(), None, None), None);

        let pair = VideoPair::new(None, Some(VideoRef::Url("https://x/b.mp4".to_string())));
        assert_eq!(invert_pair(&spawner, &fake_encoder(), Some(&pair), None), Some(pair));
        assert!(spawner.get_received_calls().is_empty());
    }

    #[test]
    fn test_invert_missing_input_never_spawns() {
        let spawner = MockFfmpegSpawner::new();
        let input = VideoRef::Path(PathBuf::from("/definitely/not/here.mp4"));
        let result = invert(&spawner, &fake_encoder(), &input, Path::new("out.mp4"));
        assert!(matches!(result, Err(CoreError::Io(ref e)) if e.kind() == io::ErrorKind::NotFound));
        assert!(spawner.get_received_calls().is_empty());
    }

    #[test]
    fn test_success_without_output_file_is_a_failure() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let output = tmp.path().join("never_written.mp4");
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], false);

        let input = VideoRef::Url("https://x/a.mp4".to_string());
        let result = invert(&spawner, &fake_encoder(), &input, &output);
        assert!(matches!(
            result,
            Err(CoreError::EncoderExecutionFailed { exit_code: Some(0), .. })
        ));
        Ok(())
    }

    #[test]
    fn test_stalled_encoder_is_killed_after_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mp4");
        let output = tmp.path().join("inverted.mp4");
        std::fs::write(&input, b"dummy")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(
            vec![FfmpegEvent::Log(LogLevel::Info, "frame=1".to_string())],
            true,
        );

        let result = invert_with_timeout(
            &spawner,
            &fake_encoder(),
            &VideoRef::Path(input),
            &output,
            Duration::ZERO,
        );
        assert!(matches!(
            result,
            Err(CoreError::EncoderExecutionFailed { exit_code: None, output: ref log })
                if log.contains("timed out")
        ));
        assert_eq!(spawner.get_kill_count(), 1);
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_invert_pair_normal_run_is_not_killed() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mp4");
        std::fs::write(&input, b"dummy")?;
        let original = VideoRef::Path(input);

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);
        let pair = VideoPair::new(Some(original.clone()), None);
        let output = tmp.path().join("ok.mp4");
        let result = invert_pair(&spawner, &fake_encoder(), Some(&pair), Some(&output));
        assert_eq!(spawner.get_kill_count(), 0);
        assert_eq!(
            result,
            Some(VideoPair::new(Some(original), Some(VideoRef::Path(output))))
        );
        Ok(())
    }

    #[test]
    fn test_failed_inversion_keeps_existing_output() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mp4");
        let output = tmp.path().join("inverted.mp4");
        std::fs::write(&input, b"dummy")?;
        std::fs::write(&output, b"earlier inversion")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_expectation(1, vec![], false);

        let result = invert(&spawner, &fake_encoder(), &VideoRef::Path(input), &output);
        assert!(matches!(result, Err(CoreError::EncoderExecutionFailed { .. })));
        assert_eq!(std::fs::read(&output)?, b"earlier inversion");
        assert_eq!(std::fs::read_dir(tmp.path())?.count(), 2);
        Ok(())
    }

    #[test]
    fn test_successful_inversion_writes_encoder_output() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mp4");
        let output = tmp.path().join("inverted.mp4");
        std::fs::write(&input, b"dummy")?;

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        invert(&spawner, &fake_encoder(), &VideoRef::Path(input), &output)?;
        assert_eq!(std::fs::read(&output)?, MOCK_OUTPUT);
        Ok(())
    }
}
