// ============================================================================
// vidslider-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Frame Progress Bar for Clip Generation
//
// The core reports the frame number of each encoder progress update; this
// module renders those updates with indicatif. The bar is hidden when stderr
// is not a terminal so piped and test runs stay clean.
//
// AI-ASSISTANT-INFO: CLI-specific progress reporting utilities

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "  Encoding: {percent:>3}% [{bar:30}] frame {pos}/{len} ({elapsed})";

/// Progress bar over the frames of one clip.
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Creates a bar for `total_frames`, drawn only on an interactive stderr.
    #[must_use]
    pub fn new(total_frames: u64) -> Self {
        let target = if console::Term::stderr().is_term() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self::with_target(total_frames, target)
    }

    fn with_target(total_frames: u64, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total_frames), target);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("##."));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Moves the bar to `frame`. Updates never move it backwards.
    pub fn update(&self, frame: u32) {
        let frame = u64::from(frame).min(self.bar.length().unwrap_or(u64::MAX));
        if frame > self.bar.position() {
            self.bar.set_position(frame);
        }
    }

    /// Removes the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let progress = FrameProgress::with_target(150, ProgressDrawTarget::hidden());
        progress.update(10);
        progress.update(5);
        assert_eq!(progress.bar.position(), 10);
        progress.update(400);
        assert_eq!(progress.bar.position(), 150);
        progress.finish();
    }
}
