use alloc::vec::Vec;

use crate::{CarouselError, WrapMode};

/// The slide sequence as rendered, plus the logical ⇄ display index mapping.
///
/// Under [`WrapMode::Infinite`] the sequence is augmented once at construction:
///
/// ```text
/// display:  0        1    2    ..  N     N+1
/// slide:    [N-1]'   0    1    ..  N-1   [0]'
/// ```
///
/// where `'` marks a clone. Under [`WrapMode::Rewind`] the sequence is left as is and both index
/// spaces coincide.
#[derive(Clone, Debug)]
pub struct CloneManager<T> {
    wrap: WrapMode,
    slides: Vec<T>,
    logical_len: usize,
}

impl<T: Clone> CloneManager<T> {
    pub fn new(slides: Vec<T>, wrap: WrapMode) -> Result<Self, CarouselError> {
        let logical_len = slides.len();
        if logical_len == 0 {
            return Err(CarouselError::NoSlides);
        }

        let slides = match wrap {
            WrapMode::Rewind => slides,
            WrapMode::Infinite => {
                let mut extended = Vec::with_capacity(logical_len + 2);
                extended.extend(slides.last().cloned());
                extended.extend(slides.iter().cloned());
                extended.extend(slides.first().cloned());
                extended
            }
        };

        ctrace!(
            logical_len,
            display_len = slides.len(),
            "CloneManager::new"
        );
        Ok(Self {
            wrap,
            slides,
            logical_len,
        })
    }
}

impl<T> CloneManager<T> {
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Length of the display sequence (`N + 2` under infinite wrap).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[doc(hidden)]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of real slides, `N`.
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    pub fn initial_display(&self) -> usize {
        match self.wrap {
            WrapMode::Rewind => 0,
            WrapMode::Infinite => 1,
        }
    }

    pub fn is_clone(&self, display: usize) -> bool {
        match self.wrap {
            WrapMode::Rewind => false,
            WrapMode::Infinite => display == 0 || display == self.logical_len + 1,
        }
    }

    pub fn to_logical(&self, display: usize) -> usize {
        match self.wrap {
            WrapMode::Rewind => display % self.logical_len,
            WrapMode::Infinite => (display + self.logical_len - 1) % self.logical_len,
        }
    }

    /// Maps a logical index to its non-clone display position.
    ///
    /// Returns `None` when `logical` is out of range.
    pub fn to_display(&self, logical: usize) -> Option<usize> {
        if logical >= self.logical_len {
            return None;
        }
        Some(match self.wrap {
            WrapMode::Rewind => logical,
            WrapMode::Infinite => logical + 1,
        })
    }

    pub fn get(&self, display: usize) -> Option<&T> {
        self.slides.get(display)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slides
    }
}
