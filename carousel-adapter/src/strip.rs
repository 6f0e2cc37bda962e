use carousel::{Frame, RenderSink};

/// CSS timing functions, as cubic Bézier curves from `(0, 0)` to `(1, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    /// The curve slide tracks are styled with (`transform <speed>s ease-in-out`).
    #[default]
    EaseInOut,
}

impl Easing {
    /// `(x1, y1, x2, y2)`, as written in `cubic-bezier(...)`.
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Self::Linear => None,
            Self::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
        }
    }

    /// Eased progress for linear progress `t`.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };
        // x(s) is monotonic when x1 and x2 lie in [0, 1], so bisection converges.
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            if bezier(x1, x2, mid) < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, (lo + hi) * 0.5)
    }
}

fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

/// Strip position in slide widths, as a percentage offset. Positions are never negative.
fn percent(position: f32) -> u64 {
    (position * 100.0 + 0.5) as u64
}

/// Strip motion toward one display index. Positions are in slide widths.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripTween {
    pub from: f32,
    pub to: usize,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl StripTween {
    pub fn new(from: f32, to: usize, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Lands exactly on `to` once the duration has elapsed.
    pub fn position(&self, now_ms: u64) -> f32 {
        let to = self.to as f32;
        if self.is_done(now_ms) {
            return to;
        }
        self.from + (to - self.from) * self.easing.sample(self.progress(now_ms))
    }
}

/// One animation step reported by [`StripAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripSample {
    /// In slide widths; fractional mid-transition.
    pub position: f32,
    pub offset_percent: u64,
    /// The caption overlay trails the strip by half a slide.
    pub caption_offset_percent: i64,
    pub progress: f32,
    /// `true` on the step that ends the transition; the controller turns it into a completion
    /// signal.
    pub finished: bool,
}

/// A render sink wrapper for renderers without native transitions (TUI, immediate-mode GUI).
///
/// Animated frames start a tween from wherever the strip is, so a direct selection that
/// interrupts a running slide continues smoothly. Snaps jump. Drive it with `tick(now_ms)` each
/// frame and draw the returned offsets.
#[derive(Clone, Debug)]
pub struct StripAnimator<R> {
    inner: R,
    duration_ms: u64,
    easing: Easing,
    position: f32,
    tween: Option<StripTween>,
}

impl<R> StripAnimator<R> {
    pub fn new(inner: R, duration_ms: u64, easing: Easing) -> Self {
        Self {
            inner,
            duration_ms,
            easing,
            position: 0.0,
            tween: None,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Strip position as of the last `tick` or jump.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn offset_percent(&self) -> u64 {
        percent(self.position)
    }

    pub fn caption_offset_percent(&self) -> i64 {
        percent(self.position) as i64 - 50
    }

    /// Advances the tween, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<StripSample> {
        let tween = self.tween?;
        self.position = tween.position(now_ms);
        let finished = tween.is_done(now_ms);
        if finished {
            self.tween = None;
        }
        Some(StripSample {
            position: self.position,
            offset_percent: self.offset_percent(),
            caption_offset_percent: self.caption_offset_percent(),
            progress: tween.progress(now_ms),
            finished,
        })
    }
}

impl<R: RenderSink> RenderSink for StripAnimator<R> {
    fn apply(&mut self, frame: &Frame) {
        let target = frame.display_index;
        if frame.animate {
            let from = match self.tween {
                Some(running) => running.position(frame.at_ms),
                None => self.position,
            };
            self.tween = Some(StripTween::new(
                from,
                target,
                frame.at_ms,
                self.duration_ms,
                self.easing,
            ));
        } else {
            self.tween = None;
            self.position = target as f32;
        }
        self.inner.apply(frame);
    }
}
