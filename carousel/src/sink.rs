use alloc::vec::Vec;

use crate::{Frame, IndicatorView};

/// Receives every committed position change.
///
/// Implementations reposition the visual strip (`frame.strip_offset_percent()`), honor
/// `frame.animate` (jump when `false`), and update per-slide decoration such as the caption
/// overlay and the active marker.
pub trait RenderSink {
    fn apply(&mut self, frame: &Frame);
}

impl RenderSink for Vec<Frame> {
    fn apply(&mut self, frame: &Frame) {
        self.push(*frame);
    }
}

impl<F: FnMut(&Frame)> RenderSink for F {
    fn apply(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Renders the position indicator: one marker per slide, or a numeric label.
pub trait IndicatorSink {
    fn render(&mut self, view: &IndicatorView);
}

/// An indicator sink for carousels without an indicator container.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIndicators;

impl IndicatorSink for NoIndicators {
    fn render(&mut self, _view: &IndicatorView) {}
}

impl IndicatorSink for Vec<IndicatorView> {
    fn render(&mut self, view: &IndicatorView) {
        self.push(*view);
    }
}
