use thiserror::Error;

/// Failures the page recognizes. None of them is fatal to the page as a
/// whole; each one disables only the feature that hit it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("element {0} has an unexpected type")]
    WrongElementType(&'static str),
    #[error("audio playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("audio graph error: {0}")]
    AudioGraph(String),
}
