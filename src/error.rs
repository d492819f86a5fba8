// error.rs - Error taxonomy for the fun commands
// Every handler failure is one of these. Validation errors are shown to the user
// by the handler itself; the rest bubble up to the framework's after hook.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunError {
    /// Bad user input. The handler replies with the message and stops.
    #[error("{0}")]
    Validation(String),

    /// An external service was unreachable or answered with a non-success status.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Malformed base64, bottom text or UTF-8.
    #[error("could not decode input: {0}")]
    Decode(String),

    #[error("no {0} emojis are available")]
    EmptyEmojiPool(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FunError {
    pub fn validation(message: impl Into<String>) -> Self {
        FunError::Validation(message.into())
    }
}

impl From<std::string::FromUtf8Error> for FunError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        FunError::Decode(format!("result is not valid UTF-8 ({})", e))
    }
}

impl From<base64::DecodeError> for FunError {
    fn from(e: base64::DecodeError) -> Self {
        FunError::Decode(format!("not valid base64 ({})", e))
    }
}

pub type FunResult<T> = Result<T, FunError>;
