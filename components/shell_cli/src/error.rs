//! Error types for the CLI

use core_types::ScriptError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source that does not lex or parse
    #[error("parse error: {0}")]
    ParseError(String),

    /// Script runtime error
    #[error("script error: {0}")]
    ScriptError(#[from] ScriptError),

    /// File I/O error
    #[error("file error: {0}")]
    IoError(#[from] std::io::Error),

    /// REPL error
    #[error("repl error: {0}")]
    ReplError(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
