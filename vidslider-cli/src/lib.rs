// vidslider-cli/src/lib.rs
//
// Library portion of the vidslider CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GenerateArgs, InvertArgs, PayloadArgs, PayloadCommands};
pub use commands::{run_generate, run_invert, run_payload_decode, run_payload_encode};
pub use error::{CliErrorContext, CliResult};
