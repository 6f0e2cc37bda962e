use carousel::{Carousel, CarouselOptions, IndicatorSink, RenderSink};

use crate::Markup;

/// Keys the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`KeyboardEvent.key`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// An input event addressed to one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    PrevButton,
    NextButton,
    Key(Key),
    /// A click on indicator `i`. Comes straight from UI state, so it may be out of range.
    IndicatorClick(i64),
    PointerEnter,
    PointerLeave,
    GestureBegin { x: f32 },
    GestureEnd { x: f32 },
    TransitionEnd { property: &'a str },
}

/// Which input sources an instance is wired to.
///
/// Events from sources that are not bound are ignored by [`dispatch`], so several carousels can
/// share one event loop without reacting to each other's controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bindings {
    /// Both direction buttons are present.
    pub buttons: bool,
    pub indicators: bool,
    /// Arrow keys. The embedder decides which instance has keyboard scope.
    pub keyboard: bool,
    pub swipe: bool,
    /// Pointer enter/leave pause autoplay. Only bound when autoplay and hover-pause are on.
    pub hover: bool,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            buttons: true,
            indicators: true,
            keyboard: true,
            swipe: true,
            hover: true,
        }
    }
}

impl Bindings {
    pub fn from_markup<T>(markup: &Markup<T>, options: &CarouselOptions) -> Self {
        Self {
            buttons: markup.has_prev_button && markup.has_next_button,
            indicators: markup.has_indicators,
            keyboard: true,
            swipe: true,
            hover: options.autoplay && options.hover_pause,
        }
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }
}

/// Routes one input event to the matching carousel handler.
///
/// Returns `true` if the event changed the carousel (a commit, a gate release, an autoplay state
/// change). Gesture-begin events return `false` even though they are recorded.
pub fn dispatch<T, R: RenderSink, I: IndicatorSink>(
    carousel: &mut Carousel<T, R, I>,
    bindings: &Bindings,
    event: InputEvent<'_>,
    now_ms: u64,
) -> bool {
    atrace!(?event, now_ms, "dispatch");
    match event {
        InputEvent::PrevButton if bindings.buttons => carousel.prev(now_ms),
        InputEvent::NextButton if bindings.buttons => carousel.next(now_ms),
        InputEvent::Key(Key::ArrowLeft) if bindings.keyboard => carousel.prev(now_ms),
        InputEvent::Key(Key::ArrowRight) if bindings.keyboard => carousel.next(now_ms),
        InputEvent::IndicatorClick(i) if bindings.indicators => match usize::try_from(i) {
            Ok(logical) => carousel.go_to(logical, now_ms),
            Err(_) => false,
        },
        InputEvent::PointerEnter if bindings.hover => carousel.on_pointer_enter(),
        InputEvent::PointerLeave if bindings.hover => carousel.on_pointer_leave(now_ms),
        InputEvent::GestureBegin { x } if bindings.swipe => {
            carousel.on_gesture_begin(x);
            false
        }
        InputEvent::GestureEnd { x } if bindings.swipe => carousel.on_gesture_end(x, now_ms),
        InputEvent::TransitionEnd { property } => carousel.on_transition_end(property),
        _ => false,
    }
}
