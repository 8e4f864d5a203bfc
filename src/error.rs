//! Error types for configuration and high score storage

use std::fmt;
use std::io;

/// Rejected configuration, reported at construction time
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    DegeneratePlayArea { width: f32, height: f32 },
    NonPositiveMaxHealth { value: i64 },
    MaxHealthOutOfRange { value: i64 },
    InvalidFrameDt { value: f32 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegeneratePlayArea { width, height } => {
                write!(f, "degenerate play area: {width}x{height}")
            }
            Self::NonPositiveMaxHealth { value } => {
                write!(f, "max health must be positive, got {value}")
            }
            Self::MaxHealthOutOfRange { value } => {
                write!(f, "max health must be at most {}, got {value}", u32::MAX)
            }
            Self::InvalidFrameDt { value } => {
                write!(f, "max frame dt must be finite and positive, got {value}")
            }
            Self::Parse(msg) => write!(f, "settings parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reading or writing the stored high score
#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Malformed { contents: String },
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "high score i/o error: {err}"),
            Self::Malformed { contents } => {
                write!(f, "high score file is not an integer: {contents:?}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
