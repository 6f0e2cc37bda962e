//! A headless carousel navigation and transition controller.
//!
//! For adapter-level utilities (markup mounting, input dispatch, a frame-driven strip animator),
//! see the `carousel-adapter` crate.
//!
//! This crate tracks the active slide of a cyclic carousel, arbitrates navigation requests from
//! independent sources (buttons, keyboard, indicators, autoplay, swipes), and serializes
//! transitions so overlapping requests cannot corrupt the visible state. Two wrap policies are
//! supported: rewind (plain modulo) and infinite (boundary clones plus an invisible snap).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a monotonic millisecond clock (`now_ms` arguments and periodic `tick`)
//! - a render sink that positions the slide strip
//! - completion signals when a transition ends (optional; a fallback timeout releases the gate)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod clones;
mod error;
mod gate;
mod gesture;
mod options;
mod sink;
mod state;
mod timer;
mod types;


pub use autoplay::AutoplayScheduler;
pub use carousel::Carousel;
pub use clones::CloneManager;
pub use error::CarouselError;
pub use gate::TransitionGate;
pub use gesture::GestureRecognizer;
pub use options::{
    CarouselOptions, DEFAULT_HEIGHT, DEFAULT_INDICATOR_LIMIT, DEFAULT_INTERVAL_MS,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TRANSITION_MS, DEFAULT_WIDTH,
    MAX_INTERVAL_MS, MAX_SETTLE_DELAY_MS, MAX_TRANSITION_MS, MIN_SETTLE_DELAY_MS, RawOptions,
    is_valid_size, validate_size,
};
pub use sink::{IndicatorSink, NoIndicators, RenderSink};
pub use state::CarouselState;
pub use timer::TimerSlot;
pub use types::{
    AutoplayState, Direction, DisplayMode, Frame, IndicatorView, TransitionState,
    TransitionStyle, WrapMode,
};
