//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on navigation state and transition timing.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Mounting from a description of the container markup (marker classes, data attributes)
//! - Instance-scoped input dispatch (buttons, keys, indicators, hover, swipes)
//! - A tween-driven strip animator for renderers without native transitions
//! - Layout sizing for the responsive and fullscreen modes
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod input;
mod layout;
mod markup;
mod strip;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use input::{Bindings, InputEvent, Key, dispatch};
pub use layout::Layout;
pub use markup::Markup;
pub use strip::{Easing, StripAnimator, StripSample, StripTween};
