// ============================================================================
// vidslider-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types and Utilities
//
// This module defines the error types used throughout the vidslider-core
// library. Every failure is surfaced to the caller immediately; nothing is
// retried and nothing is replaced with a default value.
//
// KEY COMPONENTS:
// - CoreError: Enum of all error kinds raised by the library
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper functions for building process-related errors
//
// AI-ASSISTANT-INFO: Error handling system for vidslider-core

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors raised by the generator, the payload adapter and the inversion demo.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Generator errors ----
    /// The color string is neither a known name nor three integers in 0..=255.
    #[error(
        "Invalid color format: {0}. Use named colors (e.g., 'red') or RGB format (e.g., '255,0,0')"
    )]
    InvalidColorFormat(String),

    /// Width, height, duration or frame rate is not a positive value.
    #[error("Invalid render parameters: {0}")]
    InvalidRenderParams(String),

    /// The encoder executable could not be located.
    #[error("Encoder '{0}' not found. Please install ffmpeg and ensure it's on PATH")]
    EncoderUnavailable(String),

    /// The encoder ran but exited abnormally.
    #[error("Encoder exited with {}: {output}", describe_exit_code(.exit_code))]
    EncoderExecutionFailed {
        /// Exit code of the process, `None` if it was killed or terminated by a signal.
        exit_code: Option<i32>,
        /// Log and error lines captured from the process.
        output: String,
    },

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    // ---- Adapter errors ----
    /// A non-null payload without its two slots.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A video value that is neither a filesystem path nor an http(s) URL.
    #[error("Unsupported video value: {0}. Expected a file path or an http(s) URL")]
    UnsupportedVideoValue(String),

    // ---- Front-end errors ----
    /// Failure reported by a front-end, usually with added context.
    #[error("{0}")]
    OperationFailed(String),

    // ---- Wrapped errors ----
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for vidslider-core operations
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (killed or terminated by signal)".to_string(),
    }
}

/// Builds an `EncoderExecutionFailed` from the process exit status.
pub fn command_failed_error(status: ExitStatus, output: impl Into<String>) -> CoreError {
    CoreError::EncoderExecutionFailed {
        exit_code: status.code(),
        output: output.into(),
    }
}

pub fn command_start_error(cmd_name: &str, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd_name.to_string(), err)
}

pub fn command_wait_error(cmd_name: &str, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd_name.to_string(), err)
}
