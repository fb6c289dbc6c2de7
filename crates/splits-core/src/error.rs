use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty game string")]
    EmptyInput,

    #[error("Invalid roll symbol {symbol:?} at position {position}")]
    InvalidRoll { symbol: char, position: usize },

    #[error("Expected {expected} frames, got {actual}")]
    FrameCount { expected: usize, actual: usize },

    #[error("Frame {frame} is neither a strike nor two rolls")]
    MalformedFrame { frame: usize },

    #[error("Final frame should hold {expected} rolls, got {actual}")]
    FinalFrameRolls { expected: usize, actual: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
