//! Parser error helpers

use core_types::{ErrorKind, ScriptError};

/// Create a syntax error
pub fn syntax_error(message: impl Into<String>) -> ScriptError {
    ScriptError {
        kind: ErrorKind::SyntaxError,
        message: message.into(),
    }
}

/// Create a capture error for a name the analyzer cannot capture
pub fn capture_error(message: impl Into<String>) -> ScriptError {
    ScriptError {
        kind: ErrorKind::CaptureError,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error() {
        let err = syntax_error("test");
        assert!(matches!(err.kind, ErrorKind::SyntaxError));
        assert_eq!(err.message, "test");
    }

    #[test]
    fn test_capture_error() {
        let err = capture_error("bad target");
        assert!(matches!(err.kind, ErrorKind::CaptureError));
    }
}
