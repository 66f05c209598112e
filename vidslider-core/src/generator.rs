// ============================================================================
// vidslider-core/src/generator.rs
// ============================================================================
//
// COLOR-CLIP GENERATOR: Solid-Color Test Clips via ffmpeg
//
// Synthesizes a constant-color clip with the current frame number drawn in
// the center, in the inverted color, and encodes it as browser-friendly
// H.264 with the moov atom at the front of the file.
//
// AI-ASSISTANT-INFO: ffmpeg command construction and execution for test clips

use crate::color::{Rgb, resolve_color};
use crate::config::{
    H264_LEVEL, H264_PROFILE, OVERLAY_FONT_SIZE, PIXEL_FORMAT, RenderParams, VIDEO_CODEC,
};
use crate::error::CoreResult;
use crate::external::{EncoderLocation, FfmpegSpawner, run_to_completion};
use crate::temp_files;
use crate::utils::{format_bytes, format_duration};

use ffmpeg_sidecar::command::FfmpegCommand;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// `lavfi` source descriptor for a constant-color clip.
#[must_use]
pub fn color_source(color: Rgb, params: &RenderParams) -> String {
    format!(
        "color=c={}:size={}:duration={}:rate={}",
        color.to_hex(),
        params.size(),
        params.duration_secs,
        params.frame_rate
    )
}

/// `drawtext` filter that centers the frame number in the inverted color.
#[must_use]
pub fn frame_number_overlay(color: Rgb) -> String {
    format!(
        "drawtext=text=%{{frame_num}}:fontcolor={}:fontsize={}:x=(w-text_w)/2:y=(h-text_h)/2",
        color.inverted().to_hex(),
        OVERLAY_FONT_SIZE
    )
}

/// Full argument list passed to the encoder, in order.
#[must_use]
pub fn color_clip_args(color: Rgb, params: &RenderParams, output_path: &Path) -> Vec<String> {
    let mut args: Vec<String> = [
        "-y",
        "-f",
        "lavfi",
        "-i",
        &color_source(color, params),
        "-vf",
        &frame_number_overlay(color),
        "-c:v",
        VIDEO_CODEC,
        "-pix_fmt",
        PIXEL_FORMAT,
        "-profile:v",
        H264_PROFILE,
        "-level",
        H264_LEVEL,
        "-movflags",
        "+faststart",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    args.push(output_path.to_string_lossy().into_owned());
    args
}

/// Generates a solid-color clip with a frame counter.
///
/// `color` is a color name or an `r,g,b` string (see [`resolve_color`]).
/// Returns `output_path` once the encoder has exited successfully.
///
/// # Errors
///
/// - `InvalidColorFormat` if `color` cannot be resolved
/// - `InvalidRenderParams` if `params` has non-positive values
/// - `EncoderUnavailable` if the encoder cannot be located
/// - `EncoderExecutionFailed` if the encoder exits abnormally
///
/// # Examples
///
/// ```rust,no_run
/// use vidslider_core::config::RenderParams;
/// use vidslider_core::external::{EncoderLocation, SidecarSpawner};
/// use vidslider_core::generate;
///
/// let encoder = EncoderLocation::system().probe();
/// let path = generate(
///     &SidecarSpawner,
///     &encoder,
///     "green",
///     "green.mp4",
///     &RenderParams::default(),
/// )
/// .unwrap();
/// assert_eq!(path.to_str(), Some("green.mp4"));
/// ```
pub fn generate<S: FfmpegSpawner>(
    spawner: &S,
    encoder: &EncoderLocation,
    color: &str,
    output_path: impl AsRef<Path>,
    params: &RenderParams,
) -> CoreResult<PathBuf> {
    generate_with_progress(spawner, encoder, color, output_path, params, |_| {})
}

/// Same as [`generate`], reporting the frame number of each progress update.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with_progress<S, F>(
    spawner: &S,
    encoder: &EncoderLocation,
    color: &str,
    output_path: impl AsRef<Path>,
    params: &RenderParams,
    on_progress: F,
) -> CoreResult<PathBuf>
where
    S: FfmpegSpawner,
    F: FnMut(u32),
{
    let output_path = output_path.as_ref();
    let rgb = resolve_color(color)?;
    params.validate()?;
    let encoder_path = encoder.resolve()?;

    info!("Creating H.264 video with {} color...", rgb);
    info!("Video size: {}", params.size());
    info!("Duration: {} seconds", params.duration_secs);
    debug!("Background color: {}", rgb.to_hex());
    debug!("Text color (inverted): {}", rgb.inverted().to_hex());

    // The encoder writes next to the destination; only a finished clip
    // replaces whatever is already at `output_path`.
    let staged = temp_files::staging_path_for(output_path)?;
    let args = color_clip_args(rgb, params, &staged);
    debug!("Running: {} {}", encoder_path.display(), args.join(" "));

    let mut cmd = FfmpegCommand::new_with_path(&encoder_path);
    cmd.args(&args);

    let start = Instant::now();
    let process = spawner.spawn(cmd)?;
    run_to_completion(process, on_progress)?;
    temp_files::commit_staged(staged, output_path)?;

    let size = std::fs::metadata(output_path).map(|m| m.len()).ok();
    info!(
        "H.264 video saved as: {} ({}, {})",
        output_path.display(),
        size.map_or_else(|| "size unknown".to_string(), format_bytes),
        format_duration(start.elapsed())
    );
    Ok(output_path.to_path_buf())
}
