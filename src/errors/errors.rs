use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Reason attached to a class that runs off the end of its input.
pub const UNTERMINATED_CLASS: &str = "Unterminated character class";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedClass { .. } => "MalformedClass",
        }
    }

    /// The full pattern the failing parse was working on.
    pub fn get_regex(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedClass { regex, .. } => regex,
        }
    }

    pub fn get_message(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedClass { message, .. } => message,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedClass { message, .. } if message == UNTERMINATED_CLASS => {
                ErrorTip::Suggestion(String::from("did you forget a closing `]`?"))
            }
            ErrorImpl::MalformedClass { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid regular expression: /{regex}/: {message}")]
    MalformedClass { regex: String, message: String },
}

/// Reports a malformed pattern. Always returns `Err`, so callers can write
/// `return fail(regex, "...")` or `fail(regex, "...")?`.
pub fn fail<T>(regex: &str, message: impl Into<String>) -> Result<T, Error> {
    fail_at(regex, message, Position::null())
}

/// Same as [`fail`], but records where in `regex` the problem starts.
pub fn fail_at<T>(regex: &str, message: impl Into<String>, position: Position) -> Result<T, Error> {
    Err(Error::new(
        ErrorImpl::MalformedClass {
            regex: String::from(regex),
            message: message.into(),
        },
        position,
    ))
}
