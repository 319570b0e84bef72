use thiserror::Error;

/// Everything that can go wrong between a `BeatConfig` and a WAV file.
#[derive(Error, Debug)]
pub enum BeatError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("channel length mismatch: left has {left} samples, right has {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BeatError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BeatError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<hound::Error> for BeatError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => BeatError::Io(e),
            other => BeatError::Io(std::io::Error::other(other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, BeatError>;
