//! Error types for the reader entry point

use std::fmt;

/// Errors that can occur while translating from a byte stream.
///
/// Translating an in-memory string never fails; malformed markup is repaired by the parser and
/// unknown markup degrades to its text.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// Reading the input failed
    Io(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<std::io::Error> for TranslateError {
    fn from(err: std::io::Error) -> Self {
        TranslateError::Io(err.to_string())
    }
}
