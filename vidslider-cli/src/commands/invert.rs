// ============================================================================
// vidslider-cli/src/commands/invert.rs
// ============================================================================
//
// INVERT COMMAND: Inversion Demo
//
// Pairs the input clip with its color-inverted copy and prints the transfer
// payload the comparison slider would receive. If inversion fails the payload
// shows the original on both sides, as the demo does.
//
// AI-ASSISTANT-INFO: Implementation of the invert command

use crate::cli::InvertArgs;
use crate::error::{CliErrorContext, CliResult};

use vidslider_core::external::SidecarSpawner;
use vidslider_core::{
    EncoderLocation, TransferPayload, VideoPair, VideoRef, encode, invert_pair,
};

/// Executes `invert` and returns the printed payload JSON.
///
/// # Errors
///
/// Fails only if the resulting pair cannot be encoded (e.g. an input that is
/// neither a path nor an http(s) URL).
pub fn run_invert(args: InvertArgs, encoder: &EncoderLocation) -> CliResult<String> {
    let original = VideoRef::classify(&args.input);
    let pair = VideoPair::new(Some(original), None);

    let shown = invert_pair(&SidecarSpawner, encoder, Some(&pair), args.output.as_deref());
    let payload = encode(shown.as_ref())
        .cli_with_context(|| format!("Building payload for '{}'", args.input))?;

    let json = TransferPayload::to_json(payload.as_ref())?;
    println!("{json}");
    Ok(json)
}
