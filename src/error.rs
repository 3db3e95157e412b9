//! Crate-level error types.

use std::fmt;

/// Errors produced by the navcam crate.
///
/// Only configuration-facing calls fail. Geometry problems during an
/// interaction are never errors: the affected frame is skipped instead.
#[derive(Debug)]
pub enum NavError {
    /// A binding referenced a button outside Left/Middle/Right.
    UnknownButton(String),
    /// A binding referenced a mode other than Rotate/Pan/Dolly.
    UnknownMode(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Gesture script parsing failure.
    Script(String),
}

impl NavError {
    /// Whether this error came from binding validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownButton(_) | Self::UnknownMode(_))
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownButton(button) => {
                write!(f, "unknown button: {button}")
            }
            Self::UnknownMode(mode) => {
                write!(f, "unknown interaction mode: {mode}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Script(msg) => write!(f, "gesture script error: {msg}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
