use alloc::string::{String, ToString};

use carousel::{CarouselOptions, DisplayMode};

/// Container and slide-image sizing derived from the display mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub container_width: String,
    pub container_height: String,
    pub container_margin: String,
    pub image_width: String,
    pub image_height: String,
    /// Fullscreen carousels also need the page's own padding and margin removed.
    pub reset_page_margins: bool,
}

impl Layout {
    pub fn resolve(options: &CarouselOptions) -> Self {
        match options.mode {
            DisplayMode::Fullscreen => Self {
                container_width: "100vw".to_string(),
                container_height: "100vh".to_string(),
                container_margin: "0".to_string(),
                image_width: "100vw".to_string(),
                image_height: "100vh".to_string(),
                reset_page_margins: true,
            },
            DisplayMode::Responsive => Self {
                container_width: options.width.clone(),
                container_height: options.height.clone(),
                container_margin: "0 auto".to_string(),
                image_width: "100%".to_string(),
                image_height: options.height.clone(),
                reset_page_margins: false,
            },
        }
    }
}
