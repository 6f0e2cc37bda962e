use alloc::string::{String, ToString};

use crate::{DisplayMode, TransitionStyle, WrapMode};

pub const DEFAULT_INTERVAL_MS: u64 = 5_000;
pub const MAX_INTERVAL_MS: u64 = 100_000;
pub const DEFAULT_TRANSITION_MS: u64 = 500;
pub const MAX_TRANSITION_MS: u64 = 100_000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;
pub const MIN_SETTLE_DELAY_MS: u64 = 10;
pub const MAX_SETTLE_DELAY_MS: u64 = 50;
pub const DEFAULT_INDICATOR_LIMIT: usize = 12;
pub const DEFAULT_SWIPE_THRESHOLD: u32 = 50;
pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "450px";

/// `<digits>[.<digits>]<unit>`, anchored.
#[cfg(feature = "std")]
const SIZE_PATTERN: &str =
    r"^[0-9]+(\.[0-9]+)?(%|px|em|rem|vw|vh|pt|cm|mm|in|pc|ex|ch|vmin|vmax|fr)$";

#[cfg(feature = "std")]
static SIZE_RE: std::sync::LazyLock<Option<regex::Regex>> =
    std::sync::LazyLock::new(|| regex::Regex::new(SIZE_PATTERN).ok());

#[cfg(not(feature = "std"))]
const SIZE_UNITS: &[&str] = &[
    "%", "px", "em", "rem", "vw", "vh", "pt", "cm", "mm", "in", "pc", "ex", "ch", "vmin", "vmax",
    "fr",
];

/// Unvalidated configuration, as read from user code or markup data attributes.
///
/// Durations are in seconds, the way they are written in markup (`data-interval="3"`).
/// Use [`RawOptions::or`] to layer sources (explicit options over markup hints) and
/// [`CarouselOptions::from_raw`] to validate the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawOptions {
    pub infinite: Option<bool>,
    pub autoplay: Option<bool>,
    pub hover_pause: Option<bool>,
    pub interval: Option<String>,
    pub transition_speed: Option<String>,
    pub settle_delay_ms: Option<String>,
    pub indicator_limit: Option<String>,
    pub swipe_threshold: Option<String>,
    pub transition_style: Option<String>,
    pub mode: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field-wise layering: values set on `self` win, unset ones come from `fallback`.
    pub fn or(self, fallback: RawOptions) -> RawOptions {
        RawOptions {
            infinite: self.infinite.or(fallback.infinite),
            autoplay: self.autoplay.or(fallback.autoplay),
            hover_pause: self.hover_pause.or(fallback.hover_pause),
            interval: self.interval.or(fallback.interval),
            transition_speed: self.transition_speed.or(fallback.transition_speed),
            settle_delay_ms: self.settle_delay_ms.or(fallback.settle_delay_ms),
            indicator_limit: self.indicator_limit.or(fallback.indicator_limit),
            swipe_threshold: self.swipe_threshold.or(fallback.swipe_threshold),
            transition_style: self.transition_style.or(fallback.transition_style),
            mode: self.mode.or(fallback.mode),
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
        }
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = Some(infinite);
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    pub fn with_hover_pause(mut self, hover_pause: bool) -> Self {
        self.hover_pause = Some(hover_pause);
        self
    }

    pub fn with_interval(mut self, seconds: impl Into<String>) -> Self {
        self.interval = Some(seconds.into());
        self
    }

    pub fn with_transition_speed(mut self, seconds: impl Into<String>) -> Self {
        self.transition_speed = Some(seconds.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_transition_style(mut self, style: impl Into<String>) -> Self {
        self.transition_style = Some(style.into());
        self
    }
}

/// Validated configuration for [`crate::Carousel`].
///
/// Every field holds a usable value: invalid inputs are replaced by their documented default
/// (and logged) instead of failing construction.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub wrap: WrapMode,
    /// Start autoplay at construction.
    pub autoplay: bool,
    /// Pause autoplay while the pointer is over the carousel.
    pub hover_pause: bool,
    /// Autoplay period, in `(0, MAX_INTERVAL_MS]`.
    pub interval_ms: u64,
    /// Transition duration; also the gate's fallback unlock timeout.
    pub transition_ms: u64,
    /// Delay between a snap and the animated settle that follows it.
    pub settle_delay_ms: u64,
    /// Slide count from which indicators switch from markers to a `position/total` label.
    pub indicator_limit: usize,
    /// Minimum swipe distance, exclusive.
    pub swipe_threshold: u32,
    pub transition_style: TransitionStyle,
    pub mode: DisplayMode,
    pub width: String,
    pub height: String,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Rewind,
            autoplay: false,
            hover_pause: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            indicator_limit: DEFAULT_INDICATOR_LIMIT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            transition_style: TransitionStyle::Slide,
            mode: DisplayMode::Responsive,
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw configuration once, falling back field by field.
    pub fn from_raw(raw: &RawOptions) -> Self {
        let mut options = Self {
            wrap: if raw.infinite.unwrap_or(false) {
                WrapMode::Infinite
            } else {
                WrapMode::Rewind
            },
            autoplay: raw.autoplay.unwrap_or(false),
            hover_pause: raw.hover_pause.unwrap_or(false),
            ..Self::default()
        };

        if let Some(interval) = raw.interval.as_deref() {
            options.interval_ms = parse_seconds_ms(interval, MAX_INTERVAL_MS).unwrap_or_else(|| {
                cwarn!(interval, "invalid interval, using default");
                DEFAULT_INTERVAL_MS
            });
        }
        if let Some(speed) = raw.transition_speed.as_deref() {
            options.transition_ms =
                parse_seconds_ms(speed, MAX_TRANSITION_MS).unwrap_or_else(|| {
                    cwarn!(speed, "invalid transition speed, using default");
                    DEFAULT_TRANSITION_MS
                });
        }
        if let Some(delay) = raw.settle_delay_ms.as_deref() {
            options.settle_delay_ms = match delay.trim().parse::<u64>() {
                Ok(ms) => ms.clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS),
                Err(_) => {
                    cwarn!(delay, "invalid settle delay, using default");
                    DEFAULT_SETTLE_DELAY_MS
                }
            };
        }
        if let Some(limit) = raw.indicator_limit.as_deref() {
            options.indicator_limit = limit.trim().parse().unwrap_or_else(|_| {
                cwarn!(limit, "invalid indicator limit, using default");
                DEFAULT_INDICATOR_LIMIT
            });
        }
        if let Some(threshold) = raw.swipe_threshold.as_deref() {
            options.swipe_threshold = threshold.trim().parse().unwrap_or_else(|_| {
                cwarn!(threshold, "invalid swipe threshold, using default");
                DEFAULT_SWIPE_THRESHOLD
            });
        }
        if let Some(style) = raw.transition_style.as_deref() {
            options.transition_style = match style {
                "slide" => TransitionStyle::Slide,
                "fade" => TransitionStyle::Fade,
                _ => {
                    cwarn!(style, "invalid transition style, using slide");
                    TransitionStyle::Slide
                }
            };
        }
        if let Some(mode) = raw.mode.as_deref() {
            options.mode = match mode {
                "responsive" => DisplayMode::Responsive,
                "fullscreen" => DisplayMode::Fullscreen,
                _ => {
                    cwarn!(mode, "invalid mode, using responsive");
                    DisplayMode::Responsive
                }
            };
        }
        if let Some(width) = raw.width.as_deref() {
            options.width = validate_size(width, DEFAULT_WIDTH);
        }
        if let Some(height) = raw.height.as_deref() {
            options.height = validate_size(height, DEFAULT_HEIGHT);
        }

        cdebug!(
            wrap = ?options.wrap,
            interval_ms = options.interval_ms,
            transition_ms = options.transition_ms,
            "CarouselOptions::from_raw"
        );
        options
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_hover_pause(mut self, hover_pause: bool) -> Self {
        self.hover_pause = hover_pause;
        self
    }

    /// Out-of-range periods fall back to [`DEFAULT_INTERVAL_MS`].
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = if (1..=MAX_INTERVAL_MS).contains(&interval_ms) {
            interval_ms
        } else {
            cwarn!(interval_ms, "invalid interval, using default");
            DEFAULT_INTERVAL_MS
        };
        self
    }

    /// Out-of-range durations fall back to [`DEFAULT_TRANSITION_MS`].
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = if (1..=MAX_TRANSITION_MS).contains(&transition_ms) {
            transition_ms
        } else {
            cwarn!(transition_ms, "invalid transition duration, using default");
            DEFAULT_TRANSITION_MS
        };
        self
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms.clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS);
        self
    }

    pub fn with_indicator_limit(mut self, indicator_limit: usize) -> Self {
        self.indicator_limit = indicator_limit;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: u32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub fn with_transition_style(mut self, transition_style: TransitionStyle) -> Self {
        self.transition_style = transition_style;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_width(mut self, width: &str) -> Self {
        self.width = validate_size(width, DEFAULT_WIDTH);
        self
    }

    pub fn with_height(mut self, height: &str) -> Self {
        self.height = validate_size(height, DEFAULT_HEIGHT);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("wrap", &self.wrap)
            .field("autoplay", &self.autoplay)
            .field("hover_pause", &self.hover_pause)
            .field("interval_ms", &self.interval_ms)
            .field("transition_ms", &self.transition_ms)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("indicator_limit", &self.indicator_limit)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("transition_style", &self.transition_style)
            .field("mode", &self.mode)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Parses a duration in seconds into milliseconds in `(0, max_ms]`.
fn parse_seconds_ms(seconds: &str, max_ms: u64) -> Option<u64> {
    let secs = seconds.trim().parse::<f64>().ok()?;
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    let ms = secs * 1000.0;
    if ms > max_ms as f64 {
        return None;
    }
    // Sub-millisecond durations still need a live timer.
    Some(((ms + 0.5) as u64).max(1))
}

/// Returns `size` if it matches `<digits>[.<digits>]<unit>`, otherwise `default`.
pub fn validate_size(size: &str, default: &str) -> String {
    if is_valid_size(size) {
        size.to_string()
    } else {
        cwarn!(size, default, "invalid size, using default");
        default.to_string()
    }
}

#[cfg(feature = "std")]
pub fn is_valid_size(size: &str) -> bool {
    SIZE_RE.as_ref().is_some_and(|re| re.is_match(size))
}

/// `regex` needs `std`; without it the same grammar is matched byte by byte.
#[cfg(not(feature = "std"))]
pub fn is_valid_size(size: &str) -> bool {
    let split = size
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(size.len());
    let (number, unit) = size.split_at(split);
    let (int, frac) = match number.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (number, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits) && SIZE_UNITS.contains(&unit)
}
