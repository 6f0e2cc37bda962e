use crate::{AutoplayState, TransitionState};

/// A lightweight, serializable snapshot of the controller's position and machine states.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Use it to restore
/// the visible slide across sessions with [`crate::Carousel::go_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub display_index: usize,
    pub logical_index: usize,
    pub transition: TransitionState,
    pub autoplay: AutoplayState,
}
