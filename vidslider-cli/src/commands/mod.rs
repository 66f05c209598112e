//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Renders a solid-color test clip.
pub mod generate;
/// Runs the color inversion demo and prints its payload.
pub mod invert;
/// Converts between video pairs and transfer payloads.
pub mod payload;

pub use generate::run_generate;
pub use invert::run_invert;
pub use payload::{run_payload_decode, run_payload_encode};
