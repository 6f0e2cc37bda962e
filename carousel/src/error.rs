use thiserror::Error;

/// Fatal initialization errors. Everything else degrades to a documented fallback.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The container has no slide track to move.
    #[error("carousel container has no slide track")]
    MissingTrack,
    /// The slide set is empty.
    #[error("carousel has no slides")]
    NoSlides,
}
