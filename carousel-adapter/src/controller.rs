use carousel::{
    Carousel, CarouselError, CarouselOptions, IndicatorSink, NoIndicators, RawOptions, RenderSink,
};

use crate::{Bindings, Easing, InputEvent, Layout, Markup, StripAnimator, StripSample, dispatch};

/// A framework-neutral controller that mounts a `carousel::Carousel` from markup and drives a
/// frame-based strip animation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle(event, now_ms)` when an input event for this instance occurs
/// - `tick(now_ms)` each frame/timer tick (strip tween, snap settle, gate fallback, autoplay)
///
/// The strip animator reports when a tween finishes, and the controller feeds that back to the
/// transition gate as the completion signal, so renderers without native transitions need no
/// extra wiring.
#[derive(Clone, Debug)]
pub struct Controller<T, R, I = NoIndicators> {
    carousel: Carousel<T, StripAnimator<R>, I>,
    bindings: Bindings,
    layout: Layout,
}

impl<T: Clone, R: RenderSink, I: IndicatorSink> Controller<T, R, I> {
    /// Validates options once and builds the carousel.
    ///
    /// Explicit options win over markup hints, which win over defaults. Fails with
    /// [`CarouselError::MissingTrack`] when the container has no slide track and
    /// [`CarouselError::NoSlides`] when it has no slides.
    pub fn mount(
        markup: Markup<T>,
        explicit: RawOptions,
        render: R,
        indicators: I,
        now_ms: u64,
    ) -> Result<Self, CarouselError> {
        if !markup.has_track {
            return Err(CarouselError::MissingTrack);
        }
        let options = CarouselOptions::from_raw(&explicit.or(markup.hints()));
        let bindings = Bindings::from_markup(&markup, &options);
        let layout = Layout::resolve(&options);
        adebug!(?bindings, slides = markup.slides.len(), "Controller::mount");

        let animator = StripAnimator::new(render, options.transition_ms, Easing::EaseInOut);
        let carousel =
            Carousel::with_indicators(markup.slides, options, animator, indicators, now_ms)?;
        Ok(Self {
            carousel,
            bindings,
            layout,
        })
    }
}

impl<T, R: RenderSink, I: IndicatorSink> Controller<T, R, I> {
    pub fn carousel(&self) -> &Carousel<T, StripAnimator<R>, I> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T, StripAnimator<R>, I> {
        &mut self.carousel
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: Bindings) {
        self.bindings = bindings;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn render_sink(&self) -> &R {
        self.carousel.render_sink().inner()
    }

    pub fn is_animating(&self) -> bool {
        self.carousel.render_sink().is_animating()
    }

    /// Routes an input event to this instance. See [`dispatch`].
    pub fn handle(&mut self, event: InputEvent<'_>, now_ms: u64) -> bool {
        dispatch(&mut self.carousel, &self.bindings, event, now_ms)
    }

    /// Advances the strip tween, then fires due carousel timers.
    ///
    /// Returns the strip sample while a tween is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<StripSample> {
        let sample = self.carousel.render_sink_mut().tick(now_ms);
        if sample.is_some_and(|s| s.finished) {
            let property = self.carousel.options().transition_style.property();
            self.carousel.on_transition_end(property);
        }
        self.carousel.tick(now_ms);
        sample
    }

    pub fn teardown(&mut self) {
        self.carousel.teardown();
    }
}
