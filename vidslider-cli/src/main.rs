// ============================================================================
// vidslider-cli/src/main.rs
// ============================================================================
//
// VIDSLIDER CLI: Entry Point
//
// Parses the command line, sets up logging, and dispatches to the command
// implementations. Any error is printed to stderr and turns into exit code 1.
//
// AI-ASSISTANT-INFO: Binary entry point for the vidslider CLI

use clap::Parser;
use std::process;
use vidslider_cli::{
    Cli, Commands, PayloadCommands, logging, run_generate, run_invert, run_payload_decode,
    run_payload_encode,
};
use vidslider_core::EncoderLocation;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("Error: failed to initialize logging: {e}");
        process::exit(1);
    }

    let encoder = cli
        .ffmpeg
        .as_deref()
        .map_or_else(EncoderLocation::system, |program| EncoderLocation::lookup(program));

    // Each command prints its own result; only success or failure matters here.
    let result = match cli.command {
        Commands::Generate(args) => run_generate(args, &encoder).map(|_| ()),
        Commands::Invert(args) => run_invert(args, &encoder).map(|_| ()),
        Commands::Payload(payload) => match payload.command {
            PayloadCommands::Encode { left, right } => {
                run_payload_encode(&left, right.as_deref()).map(|_| ())
            }
            PayloadCommands::Decode { file } => run_payload_decode(file.as_deref()).map(|_| ()),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{} {}", console::style("Error:").red().bold(), e);
        process::exit(1);
    }
}
