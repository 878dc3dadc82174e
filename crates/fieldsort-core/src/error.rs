use crate::{config::ConfigError, frame::FrameError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured error raised by the fallible outer surfaces (frame assembly,
/// field lookup, configuration). Comparators never produce one.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured detail.
    /// The variant (if present) corresponds to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl Error {
    /// Construct an error without structured detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        let class = match err {
            FrameError::LengthMismatch { .. } => ErrorClass::InvalidInput,
            FrameError::FieldNotFound { .. } => ErrorClass::NotFound,
        };

        Self {
            class,
            origin: ErrorOrigin::Frame,
            message: err.to_string(),
            detail: Some(ErrorDetail::Frame(err)),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let class = match err {
            ConfigError::Read { .. } => ErrorClass::Io,
            ConfigError::Parse(_) | ConfigError::Invalid(_) => ErrorClass::InvalidInput,
        };

        Self {
            class,
            origin: ErrorOrigin::Config,
            message: err.to_string(),
            detail: Some(ErrorDetail::Config(err)),
        }
    }
}

///
/// ErrorDetail
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Frame(FrameError),
    #[error("{0}")]
    Config(ConfigError),
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Io,
    NotFound,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::Io => "io",
            Self::NotFound => "not_found",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Frame,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Frame => "frame",
        };
        write!(f, "{label}")
    }
}
