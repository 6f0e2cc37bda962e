use alloc::string::String;
use alloc::vec::Vec;

use carousel::RawOptions;

/// What the embedding layer found inside one carousel container.
///
/// The adapter does not query any document itself: the embedder inspects its own markup (or
/// widget tree) and describes it here. Marker classes and data attributes become option hints
/// that explicit options can override (see [`crate::Controller::mount`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markup<T> {
    /// Whether the element that holds and moves the slides exists.
    pub has_track: bool,
    pub slides: Vec<T>,
    pub has_prev_button: bool,
    pub has_next_button: bool,
    pub has_indicators: bool,
    /// `class="infinite-loop"` on a child element.
    pub infinite_loop: bool,
    /// `class="auto-play"` on a child element.
    pub auto_play: bool,
    /// `class="hover-pause"` on a child element.
    pub hover_pause: bool,
    pub data_mode: Option<String>,
    pub data_width: Option<String>,
    pub data_height: Option<String>,
}

impl<T> Markup<T> {
    /// A container with a slide track and the given slides, and nothing else.
    pub fn new(slides: Vec<T>) -> Self {
        Self {
            has_track: true,
            slides,
            has_prev_button: false,
            has_next_button: false,
            has_indicators: false,
            infinite_loop: false,
            auto_play: false,
            hover_pause: false,
            data_mode: None,
            data_width: None,
            data_height: None,
        }
    }

    pub fn without_track(mut self) -> Self {
        self.has_track = false;
        self
    }

    pub fn with_buttons(mut self) -> Self {
        self.has_prev_button = true;
        self.has_next_button = true;
        self
    }

    pub fn with_indicators(mut self) -> Self {
        self.has_indicators = true;
        self
    }

    /// Records a marker class found in the container. Unknown classes are ignored.
    pub fn with_class(mut self, class: &str) -> Self {
        match class {
            "infinite-loop" => self.infinite_loop = true,
            "auto-play" => self.auto_play = true,
            "hover-pause" => self.hover_pause = true,
            _ => {}
        }
        self
    }

    /// Records a `data-*` attribute of the container (`name` without the `data-` prefix).
    /// Unknown attributes are ignored.
    pub fn with_data(mut self, name: &str, value: impl Into<String>) -> Self {
        match name {
            "mode" => self.data_mode = Some(value.into()),
            "width" => self.data_width = Some(value.into()),
            "height" => self.data_height = Some(value.into()),
            _ => {}
        }
        self
    }

    /// Option hints carried by the markup. Marker classes only ever switch features on.
    pub fn hints(&self) -> RawOptions {
        RawOptions {
            infinite: self.infinite_loop.then_some(true),
            autoplay: self.auto_play.then_some(true),
            hover_pause: self.hover_pause.then_some(true),
            mode: self.data_mode.clone(),
            width: self.data_width.clone(),
            height: self.data_height.clone(),
            ..RawOptions::default()
        }
    }
}
