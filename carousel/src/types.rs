#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Plain modulo wrap. Every step is animated.
    #[default]
    Rewind,
    /// Boundary clones are inserted so crossing either end looks seamless.
    Infinite,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionState {
    #[default]
    Idle,
    Locked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayState {
    #[default]
    Stopped,
    Running,
    /// Suspended by hover-pause; pointer-leave resumes.
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// How the renderer animates between slides.
///
/// The style decides which property's completion signal releases the transition gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionStyle {
    #[default]
    Slide,
    Fade,
}

impl TransitionStyle {
    /// The animated property whose completion ends a transition.
    pub fn property(self) -> &'static str {
        match self {
            Self::Slide => "transform",
            Self::Fade => "opacity",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    #[default]
    Responsive,
    Fullscreen,
}

/// Indicator rendering for the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorView {
    /// One marker per logical slide; `active` is the highlighted marker.
    Markers { count: usize, active: usize },
    /// A numeric `position/total` label (1-based position), used once the slide count reaches
    /// `indicator_limit`.
    Label { position: usize, total: usize },
}

impl IndicatorView {
    pub fn new(logical_index: usize, count: usize, limit: usize) -> Self {
        if count >= limit {
            Self::Label {
                position: logical_index + 1,
                total: count,
            }
        } else {
            Self::Markers {
                count,
                active: logical_index,
            }
        }
    }

    pub fn active(&self) -> usize {
        match *self {
            Self::Markers { active, .. } => active,
            Self::Label { position, .. } => position.saturating_sub(1),
        }
    }
}

impl core::fmt::Display for IndicatorView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Markers { count, active } => {
                for i in 0..*count {
                    f.write_str(if i == *active { "●" } else { "○" })?;
                }
                Ok(())
            }
            Self::Label { position, total } => write!(f, "{position}/{total}"),
        }
    }
}

/// A committed position change, handed to the render sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub display_index: usize,
    pub logical_index: usize,
    /// `false` for snaps and the initial render: the renderer must jump without animating.
    pub animate: bool,
    pub is_clone: bool,
    /// Commit time, on the adapter's clock.
    pub at_ms: u64,
    pub indicator: IndicatorView,
}

impl Frame {
    /// Strip translation in percent of one slide width (`translateX(-offset%)`).
    pub fn strip_offset_percent(&self) -> u64 {
        self.display_index as u64 * 100
    }

    /// Horizontal position of the active slide's caption overlay, in percent.
    pub fn caption_offset_percent(&self) -> i64 {
        self.display_index as i64 * 100 - 50
    }
}
