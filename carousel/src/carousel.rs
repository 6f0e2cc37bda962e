use alloc::vec::Vec;

use crate::autoplay::AutoplayScheduler;
use crate::clones::CloneManager;
use crate::gate::TransitionGate;
use crate::gesture::GestureRecognizer;
use crate::timer::TimerSlot;
use crate::{
    AutoplayState, CarouselError, CarouselOptions, CarouselState, Direction, Frame, IndicatorSink,
    IndicatorView, NoIndicators, RenderSink, TransitionState, WrapMode,
};

/// A headless carousel navigation controller.
///
/// This type does not hold any UI objects:
/// - Committed positions are pushed to a [`RenderSink`] (and an [`IndicatorSink`]).
/// - Your adapter forwards input (buttons, keys, indicator clicks, swipes, hover) to the handler
///   methods and the renderer's completion signal to [`Carousel::on_transition_end`].
/// - Deferred work (snap settle, gate fallback, autoplay) is fired by [`Carousel::tick`].
///
/// All time arguments are milliseconds on the adapter's monotonic clock.
///
/// For markup mounting, input dispatch and a frame-driven strip animator, see the
/// `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T, R, I = NoIndicators> {
    options: CarouselOptions,
    slides: CloneManager<T>,
    display: usize,
    gate: TransitionGate,
    autoplay: AutoplayScheduler,
    gesture: GestureRecognizer,
    settle: TimerSlot<usize>,
    render: R,
    indicators: I,
    torn_down: bool,
}

impl<T: Clone, R: RenderSink> Carousel<T, R, NoIndicators> {
    /// Creates a carousel without an indicator sink.
    pub fn new(
        slides: Vec<T>,
        options: CarouselOptions,
        render: R,
        now_ms: u64,
    ) -> Result<Self, CarouselError> {
        Self::with_indicators(slides, options, render, NoIndicators, now_ms)
    }
}

impl<T: Clone, R: RenderSink, I: IndicatorSink> Carousel<T, R, I> {
    /// Creates a carousel and renders the initial slide without animation.
    ///
    /// Starts autoplay when `options.autoplay` is set. Fails with [`CarouselError::NoSlides`] on
    /// an empty slide set.
    pub fn with_indicators(
        slides: Vec<T>,
        options: CarouselOptions,
        render: R,
        indicators: I,
        now_ms: u64,
    ) -> Result<Self, CarouselError> {
        let slides = CloneManager::new(slides, options.wrap)?;
        cdebug!(
            slides = slides.logical_len(),
            wrap = ?options.wrap,
            autoplay = options.autoplay,
            "Carousel::new"
        );

        let mut carousel = Self {
            display: slides.initial_display(),
            gate: TransitionGate::new(),
            autoplay: AutoplayScheduler::new(options.interval_ms),
            gesture: GestureRecognizer::new(options.swipe_threshold),
            settle: TimerSlot::new(),
            slides,
            options,
            render,
            indicators,
            torn_down: false,
        };
        carousel.commit(carousel.display, false, now_ms);
        if carousel.options.autoplay {
            carousel.autoplay.start(now_ms);
        }
        Ok(carousel)
    }
}

impl<T, R: RenderSink, I: IndicatorSink> Carousel<T, R, I> {
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn slides(&self) -> &CloneManager<T> {
        &self.slides
    }

    /// Number of real slides.
    pub fn slide_count(&self) -> usize {
        self.slides.logical_len()
    }

    pub fn display_index(&self) -> usize {
        self.display
    }

    pub fn current_logical_index(&self) -> usize {
        self.slides.to_logical(self.display)
    }

    pub fn transition_state(&self) -> TransitionState {
        self.gate.state()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// `true` between a snap and its animated settle.
    pub fn is_settling(&self) -> bool {
        self.settle.is_armed()
    }

    pub fn indicator_view(&self) -> IndicatorView {
        IndicatorView::new(
            self.current_logical_index(),
            self.slides.logical_len(),
            self.options.indicator_limit,
        )
    }

    pub fn snapshot(&self) -> CarouselState {
        CarouselState {
            display_index: self.display,
            logical_index: self.current_logical_index(),
            transition: self.gate.state(),
            autoplay: self.autoplay.state(),
        }
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn render_sink_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn indicator_sink(&self) -> &I {
        &self.indicators
    }

    /// Advances one slide. Returns `false` if the request was dropped by the transition gate.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Forward, now_ms)
    }

    /// Goes back one slide. Returns `false` if the request was dropped by the transition gate.
    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.step(Direction::Backward, now_ms)
    }

    /// Jumps to a logical slide.
    ///
    /// Direct selection always wins: this neither consults nor alters the transition gate, so it
    /// can visually interrupt an in-flight `next`/`prev`. A pending settle is cancelled.
    /// Out-of-range indexes are ignored and return `false`.
    pub fn go_to(&mut self, logical: usize, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(display) = self.slides.to_display(logical) else {
            cdebug!(
                logical,
                count = self.slides.logical_len(),
                "go_to: out of range"
            );
            return false;
        };
        self.settle.cancel();
        self.commit(display, true, now_ms);
        true
    }

    pub fn start_autoplay(&mut self, now_ms: u64) {
        if self.torn_down {
            return;
        }
        self.autoplay.start(now_ms);
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay.pause();
    }

    /// Completion signal from the renderer.
    ///
    /// Only the property animated by the configured transition style releases the gate.
    /// Signals are ignored while a snap is waiting for its settle, since the snap itself is not
    /// animated.
    pub fn on_transition_end(&mut self, property: &str) -> bool {
        if self.torn_down || self.settle.is_armed() {
            return false;
        }
        self.gate
            .on_transition_end(property, self.options.transition_style.property())
    }

    pub fn on_gesture_begin(&mut self, x: f32) {
        if !self.torn_down {
            self.gesture.begin(x);
        }
    }

    /// Completes a swipe. Returns `true` if it produced a navigation.
    pub fn on_gesture_end(&mut self, x: f32, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        match self.gesture.end(x) {
            Some(direction) => self.step(direction, now_ms),
            None => false,
        }
    }

    /// Hover-pause: suspends running autoplay when `hover_pause` is enabled.
    pub fn on_pointer_enter(&mut self) -> bool {
        if self.torn_down || !self.options.hover_pause {
            return false;
        }
        self.autoplay.suspend()
    }

    /// Resumes autoplay suspended by [`Carousel::on_pointer_enter`].
    pub fn on_pointer_leave(&mut self, now_ms: u64) -> bool {
        if self.torn_down || !self.options.hover_pause {
            return false;
        }
        self.autoplay.resume(now_ms)
    }

    /// The earliest pending deadline, if any. Adapters can sleep until then.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.settle.due(),
            self.gate.fallback_due(),
            self.autoplay.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Fires every deferred continuation due at `now_ms`, in due-time order, each at its own due
    /// time. On ties the settle runs first, then the gate fallback, then autoplay.
    ///
    /// Autoplay advances at most once per call. After a long gap the schedule resumes at the next
    /// period boundary instead of replaying every missed period.
    ///
    /// Returns the number of continuations fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while !self.torn_down {
            let candidates = [
                self.settle.due().map(|due| (due, 0u8)),
                self.gate.fallback_due().map(|due| (due, 1)),
                self.autoplay.next_due().map(|due| (due, 2)),
            ];
            let Some((due, source)) = candidates
                .into_iter()
                .flatten()
                .filter(|(due, _)| *due <= now_ms)
                .min()
            else {
                break;
            };

            match source {
                0 => self.fire_settle(due),
                1 => {
                    self.gate.poll(due);
                }
                _ => {
                    if let Some(due) = self.autoplay.poll(due) {
                        ctrace!(due, "autoplay tick");
                        self.next(due);
                        // At most one advance per tick: periods the embedder slept through are
                        // dropped, like a throttled `setInterval`.
                        let skipped = self.autoplay.skip_missed(now_ms);
                        if skipped > 0 {
                            cdebug!(skipped, now_ms, "autoplay: skipped missed periods");
                        }
                    }
                }
            }
            fired += 1;
        }
        fired
    }

    /// Cancels every pending timer. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        cdebug!(display = self.display, "Carousel::teardown");
        self.settle.cancel();
        self.gate.cancel();
        self.autoplay.cancel();
        self.gesture.cancel();
        self.torn_down = true;
    }

    fn step(&mut self, direction: Direction, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        if !self.gate.lock(now_ms, self.options.transition_ms) {
            ctrace!(?direction, "transition gate locked, request dropped");
            return false;
        }
        self.settle.cancel();

        let n = self.slides.logical_len();
        let display = self.display;
        match self.slides.wrap() {
            WrapMode::Rewind => {
                let target = match direction {
                    Direction::Forward => (display + 1) % n,
                    Direction::Backward => (display + n - 1) % n,
                };
                self.commit(target, true, now_ms);
            }
            WrapMode::Infinite => match direction {
                // Past the trailing clone: snap onto the real slide it mirrors, then settle.
                Direction::Forward if display + 1 > n + 1 => self.snap(1, 2, now_ms),
                Direction::Forward => self.commit(display + 1, true, now_ms),
                Direction::Backward if display == 0 => self.snap(n, n - 1, now_ms),
                Direction::Backward => self.commit(display - 1, true, now_ms),
            },
        }
        true
    }

    fn snap(&mut self, to: usize, settle_to: usize, now_ms: u64) {
        ctrace!(from = self.display, to, settle_to, "snap across clone boundary");
        self.commit(to, false, now_ms);
        self.settle
            .arm(now_ms.saturating_add(self.options.settle_delay_ms), settle_to);
    }

    fn fire_settle(&mut self, now_ms: u64) {
        let Some((due, target)) = self.settle.take_due(now_ms) else {
            return;
        };
        // The animation starts now; keep the fallback covering all of it.
        self.gate.extend(due, self.options.transition_ms);
        self.commit(target, true, due);
    }

    fn commit(&mut self, display: usize, animate: bool, now_ms: u64) {
        self.display = display;
        let frame = Frame {
            display_index: display,
            logical_index: self.slides.to_logical(display),
            animate,
            is_clone: self.slides.is_clone(display),
            at_ms: now_ms,
            indicator: self.indicator_view(),
        };
        ctrace!(
            display,
            logical = frame.logical_index,
            animate,
            "commit"
        );
        self.render.apply(&frame);
        self.indicators.render(&frame.indicator);
        self.autoplay.rearm(now_ms);
    }
}
