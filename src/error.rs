//! Crate-wide error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Every enabled category was empty or filtered away.
    #[error("no characters available")]
    EmptyPool,

    /// The secure random source could not deliver bytes. Never papered over
    /// with a weaker generator.
    #[error("random source {source_name} unavailable: {reason}")]
    RandomSourceUnavailable {
        source_name: &'static str,
        reason: String,
    },

    #[error("password length {0} out of range (allowed {min}..={max})", min = crate::pass::MIN_LENGTH, max = crate::pass::MAX_LENGTH)]
    InvalidLength(usize),

    #[error("settings file error: {0}")]
    SettingsIo(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
