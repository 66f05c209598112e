// ============================================================================
// vidslider-cli/src/commands/generate.rs
// ============================================================================
//
// GENERATE COMMAND: Solid-Color Test Clip
//
// Turns the `generate` arguments into render parameters, runs the core
// generator with a frame progress bar, and prints the output path on stdout.
//
// AI-ASSISTANT-INFO: Implementation of the generate command

use crate::cli::GenerateArgs;
use crate::config::default_output_path;
use crate::error::{CliErrorContext, CliResult};
use crate::progress::FrameProgress;

use log::info;
use std::path::PathBuf;
use vidslider_core::external::SidecarSpawner;
use vidslider_core::{EncoderLocation, RenderParams, generate_with_progress};

/// Render parameters described by the arguments.
///
/// # Errors
///
/// Returns `InvalidRenderParams` for non-positive sizes, durations or rates.
pub fn render_params(args: &GenerateArgs) -> CliResult<RenderParams> {
    RenderParams::builder()
        .width(args.width)
        .height(args.height)
        .duration_secs(args.duration)
        .frame_rate(args.fps)
        .build()
}

/// Executes `generate` and returns the written file.
///
/// # Errors
///
/// Any core error, prefixed with the requested color.
pub fn run_generate(args: GenerateArgs, encoder: &EncoderLocation) -> CliResult<PathBuf> {
    let params = render_params(&args)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.color));

    let progress = FrameProgress::new(params.total_frames());
    let result = generate_with_progress(
        &SidecarSpawner,
        encoder,
        &args.color,
        &output,
        &params,
        |frame| progress.update(frame),
    );
    progress.finish();

    let path = result.cli_with_context(|| format!("Generating '{}' clip", args.color))?;
    info!("Done: {}", path.display());
    println!("{}", path.display());
    Ok(path)
}
