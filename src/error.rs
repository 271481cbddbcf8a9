//! Error handling for baker hooks.
//! Defines the validation taxonomy and the result type shared by both hooks.

use crate::logger::{Logger, WorkflowError};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// Exit status reported to baker when a hook fails.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Custom error types for hook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur while reading input or writing to the console
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a hook payload that could not be read or interpreted
    #[error("Context error: {0}.")]
    ContextError(String),

    /// Represents a template variable that violates a naming rule
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
}

impl WorkflowError for Error {
    fn is_exit(&self) -> bool {
        matches!(self, Error::ValidationError(_))
    }
}

/// The rule an app slug broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugViolation {
    NotIdentifier,
    NotLowercase,
}

impl fmt::Display for SlugViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugViolation::NotIdentifier => write!(f, "is not a valid identifier"),
            SlugViolation::NotLowercase => write!(f, "should be all lowercase"),
        }
    }
}

/// A template variable rejected by the pre-generation hook.
///
/// Each variant names the offending field; the message names the rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project slug '{slug}' should be all lowercase")]
    ProjectSlug { slug: String },

    #[error("App slug '{slug}' {violation}")]
    AppSlug { slug: String, violation: SlugViolation },

    #[error("Don't include backslashes in author name")]
    AuthorName { name: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Logs a fatal error as an error line.
///
/// Validation failures are logged by the validator at the point they occur,
/// so they are not repeated here.
pub fn report_error<W: Write>(logger: &mut Logger<W>, err: &Error) -> io::Result<()> {
    if err.is_exit() {
        return Ok(());
    }
    logger.log_error(&err.to_string())
}

/// Default error handler that reports the error and exits the program
/// with [`FAILURE_EXIT_CODE`].
pub fn default_error_handler(err: Error) -> ! {
    let _ = report_error(&mut Logger::stderr(), &err);
    std::process::exit(FAILURE_EXIT_CODE);
}
