// ============================================================================
// vidslider-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Encoder
//
// This module encapsulates everything that touches the external encoder:
// locating the executable and spawning/observing ffmpeg processes.
//
// KEY COMPONENTS:
// - EncoderLocation: explicit, injectable description of where ffmpeg lives
// - Traits for process interaction (FfmpegSpawner, FfmpegProcess)
// - Concrete implementations using ffmpeg-sidecar
// - Mock spawner for tests (feature "test-mocks")
//
// DESIGN PHILOSOPHY:
// The encoder location is a value handed to every operation rather than a
// process-wide global, so callers can probe once and tests can inject a fake
// or missing encoder deterministically.
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffmpeg

// ---- Internal crate imports ----
use crate::config::DEFAULT_ENCODER_NAME;
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::path::PathBuf;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Mock spawner used by unit tests and, with "test-mocks", downstream tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_to_completion,
    run_with_deadline,
};

// ============================================================================
// ENCODER LOCATION
// ============================================================================

/// Where to find the encoder executable.
///
/// # Examples
///
/// ```rust,no_run
/// use vidslider_core::external::EncoderLocation;
///
/// // Probe PATH once and reuse the result for every call.
/// let encoder = EncoderLocation::system().probe();
/// match encoder.resolve() {
///     Ok(path) => println!("using {}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderLocation {
    /// A program name searched on PATH, or a path to an executable.
    Lookup(String),
    /// A location that was already resolved (cached probe or injected path).
    Resolved(PathBuf),
    /// The encoder is known to be absent.
    Missing,
}

impl Default for EncoderLocation {
    fn default() -> Self {
        Self::system()
    }
}

impl EncoderLocation {
    /// Looks `ffmpeg` up on PATH.
    #[must_use]
    pub fn system() -> Self {
        Self::Lookup(DEFAULT_ENCODER_NAME.to_string())
    }

    /// Uses a user-supplied program name or path.
    #[must_use]
    pub fn lookup(program: impl Into<String>) -> Self {
        Self::Lookup(program.into())
    }

    /// Performs the lookup now and caches the outcome.
    #[must_use]
    pub fn probe(self) -> Self {
        match self {
            Self::Lookup(ref program) => match which::which(program) {
                Ok(path) => {
                    log::debug!("Found encoder '{}' at {}", program, path.display());
                    Self::Resolved(path)
                }
                Err(e) => {
                    log::warn!("Encoder '{}' not found: {}", program, e);
                    Self::Missing
                }
            },
            other => other,
        }
    }

    /// Returns the path of the encoder executable.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EncoderUnavailable` if the executable cannot be found.
    pub fn resolve(&self) -> CoreResult<PathBuf> {
        match self {
            Self::Lookup(program) => which::which(program).map_err(|e| {
                log::debug!("Encoder lookup for '{}' failed: {}", program, e);
                CoreError::EncoderUnavailable(program.clone())
            }),
            Self::Resolved(path) => Ok(path.clone()),
            Self::Missing => Err(CoreError::EncoderUnavailable(
                DEFAULT_ENCODER_NAME.to_string(),
            )),
        }
    }
}
