//! A single eased scroll between two vertical offsets.

use super::easing::ease_in_out_cubic;
use super::timing::{lerp, progress};

/// Snapshot taken when a navigation starts. Neither endpoint is re-sampled
/// while the animation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    /// Scroll offset when the navigation began
    pub from: f64,
    /// Final scroll offset
    pub to: f64,
    /// Host clock reading at start, in ms
    pub started_at: f64,
    /// Total duration in ms
    pub duration: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, started_at: f64, duration: f64) -> Self {
        Self { from, to, started_at, duration }
    }

    pub fn distance(&self) -> f64 {
        self.to - self.from
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    /// Interpolated offset at host time `now`.
    pub fn offset_at(&self, now: f64) -> f64 {
        let t = progress(self.elapsed(now), self.duration);
        lerp(self.from, self.to, ease_in_out_cubic(t))
    }

    /// Another frame is needed while elapsed time is short of the duration.
    pub fn is_complete(&self, now: f64) -> bool {
        self.elapsed(now) >= self.duration
    }
}
