//! Configuration structures and constants for the vidslider-core library.
//!
//! This module holds the render parameters of generated clips and the fixed
//! encoder settings shared by every invocation.

mod builder;

pub use builder::RenderParamsBuilder;

use crate::error::{CoreError, CoreResult};
use std::time::Duration;

// Default constants

/// Default clip width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;

/// Default clip height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Default clip duration in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Default clip frame rate.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Font size of the frame-number overlay.
pub const OVERLAY_FONT_SIZE: u32 = 40;

/// Name of the encoder executable looked up on PATH.
pub const DEFAULT_ENCODER_NAME: &str = "ffmpeg";

/// H.264 settings chosen for broad browser compatibility.
pub const VIDEO_CODEC: &str = "libx264";
pub const PIXEL_FORMAT: &str = "yuv420p";
pub const H264_PROFILE: &str = "high";
pub const H264_LEVEL: &str = "4.0";

/// Longest an inversion run may take before the encoder is killed.
pub const INVERT_TIMEOUT: Duration = Duration::from_secs(300);

/// Dimensions, duration and frame rate of a generated clip.
///
/// # Examples
///
/// ```rust
/// use vidslider_core::config::RenderParams;
///
/// let params = RenderParams::default();
/// assert_eq!((params.width, params.height), (500, 500));
/// assert_eq!(params.total_frames(), 150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Duration in seconds
    pub duration_secs: f64,

    /// Frames per second
    pub frame_rate: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            duration_secs: DEFAULT_DURATION_SECS,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl RenderParams {
    #[must_use]
    pub fn builder() -> RenderParamsBuilder {
        RenderParamsBuilder::new()
    }

    /// Checks that every dimension is positive and every number finite.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRenderParams` naming the first bad field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidRenderParams(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(CoreError::InvalidRenderParams(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_secs
            )));
        }
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(CoreError::InvalidRenderParams(format!(
                "frame rate must be positive, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }

    /// Number of frames the encoder will emit, rounded up.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        (self.duration_secs * self.frame_rate).ceil() as u64
    }

    /// `WxH` size string.
    #[must_use]
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
