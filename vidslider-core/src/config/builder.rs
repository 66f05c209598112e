// ============================================================================
// vidslider-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for RenderParams
//
// Fluent construction of RenderParams starting from the defaults, with
// validation on build.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for RenderParams

use super::RenderParams;
use crate::error::CoreResult;

/// Builder for creating RenderParams instances.
///
/// # Examples
///
/// ```rust
/// use vidslider_core::config::RenderParamsBuilder;
///
/// let params = RenderParamsBuilder::new()
///     .width(200)
///     .height(200)
///     .duration_secs(1.0)
///     .frame_rate(10.0)
///     .build()
///     .unwrap();
/// assert_eq!(params.total_frames(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderParamsBuilder {
    params: RenderParams,
}

impl RenderParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.params.width = width;
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.params.height = height;
        self
    }

    #[must_use]
    pub fn duration_secs(mut self, duration_secs: f64) -> Self {
        self.params.duration_secs = duration_secs;
        self
    }

    #[must_use]
    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.params.frame_rate = frame_rate;
        self
    }

    /// Validates and returns the parameters.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRenderParams` if any value is not positive.
    pub fn build(self) -> CoreResult<RenderParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}
