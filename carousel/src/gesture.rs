use crate::Direction;

/// Turns a begin/end pointer coordinate pair into a navigation intent.
///
/// Only the pending start coordinate is kept; each `end` clears it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecognizer {
    threshold: f32,
    start: Option<f32>,
}

impl GestureRecognizer {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold as f32,
            start: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f32) {
        self.start = Some(x);
    }

    /// Completes the gesture. `delta = start - end`; a positive delta beyond the threshold means
    /// the content was dragged left, i.e. forward.
    ///
    /// Returns `None` for sub-threshold swipes and for an `end` without a matching `begin`.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start.take()?;
        let delta = start - x;
        if !(delta > self.threshold || delta < -self.threshold) {
            return None;
        }
        Some(if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
