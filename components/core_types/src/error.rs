//! Script error types and error handling.
//!
//! A single error struct covers every stage of the pipeline; the kind tells
//! the caller which stage raised it and the message carries the detail.

use thiserror::Error;

/// The kind of script error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source text that does not lex or parse
    SyntaxError,
    /// Reference to a name that is not bound
    NameError,
    /// Operation applied to a value of the wrong kind
    TypeError,
    /// Call with the wrong number of arguments
    ArityError,
    /// Integer division or modulo by zero
    DivideByZero,
    /// Integer arithmetic out of range
    OverflowError,
    /// Closure capture that cannot be formed
    CaptureError,
    /// External command that could not be dispatched
    CommandError,
    /// Internal invariant violation
    InternalError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::SyntaxError => "syntax error",
            ErrorKind::NameError => "name error",
            ErrorKind::TypeError => "type error",
            ErrorKind::ArityError => "arity error",
            ErrorKind::DivideByZero => "divide by zero",
            ErrorKind::OverflowError => "overflow",
            ErrorKind::CaptureError => "capture error",
            ErrorKind::CommandError => "command error",
            ErrorKind::InternalError => "internal error",
        };
        f.write_str(name)
    }
}

/// A script error with a category and a human-readable message.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScriptError};
///
/// let error = ScriptError::type_error("operand of ! must be bool");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert!(error.to_string().contains("bool"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ScriptError {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

/// Result type used throughout the language components.
pub type ScriptResult<T> = Result<T, ScriptError>;

impl ScriptError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ScriptError {
            kind,
            message: message.into(),
        }
    }

    /// Create a syntax error.
    pub fn syntax_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError, message)
    }

    /// Create a name error.
    pub fn name_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameError, message)
    }

    /// Create a type error.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    /// Create an arity error.
    pub fn arity_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArityError, message)
    }

    /// Create a capture error.
    pub fn capture_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CaptureError, message)
    }

    /// Create a command error.
    pub fn command_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandError, message)
    }

    /// Create an internal error.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ScriptError::name_error("x is not defined");
        assert_eq!(error.to_string(), "name error: x is not defined");
    }

    #[test]
    fn test_helper_kinds() {
        assert_eq!(
            ScriptError::syntax_error("x").kind,
            ErrorKind::SyntaxError
        );
        assert_eq!(ScriptError::type_error("x").kind, ErrorKind::TypeError);
        assert_eq!(
            ScriptError::command_error("x").kind,
            ErrorKind::CommandError
        );
    }
}
