// vidslider-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vidslider_core::config::{
    DEFAULT_DURATION_SECS, DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidslider: test clips and comparison payloads",
    long_about = "Generates solid-color test clips with ffmpeg and converts video pairs \
                  to and from the comparison slider's transfer payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Encoder program name or path (searched on PATH when not a path)
    #[arg(long, global = true, value_name = "PATH", env = "VIDSLIDER_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Enable debug logging, including the full encoder command line
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Directory for a timestamped log file
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a solid-color clip with a centered frame counter
    Generate(GenerateArgs),
    /// Inverts the colors of a clip and prints the comparison payload
    Invert(InvertArgs),
    /// Converts video pairs to and from the transfer payload
    Payload(PayloadArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Color name (e.g. "blue") or comma-separated RGB (e.g. "255,0,0")
    #[arg(required = true, value_name = "COLOR")]
    pub color: String,

    /// Output file (defaults to "<color>.mp4")
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Clip length in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: f64,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    pub fps: f64,
}

#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Local clip or http(s) URL to invert
    #[arg(required = true, value_name = "INPUT")]
    pub input: String,

    /// Output file (defaults to a fresh temporary directory)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    #[command(subcommand)]
    pub command: PayloadCommands,
}

#[derive(Subcommand, Debug)]
pub enum PayloadCommands {
    /// Prints the payload for a pair of videos ("-" marks an absent side)
    Encode {
        /// Left video: path, http(s) URL, or "-"
        #[arg(value_name = "LEFT")]
        left: String,
        /// Right video: path, http(s) URL, or "-" (absent when omitted)
        #[arg(value_name = "RIGHT")]
        right: Option<String>,
    },
    /// Reads a payload (stdin when FILE is omitted) and prints the pair
    Decode {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
