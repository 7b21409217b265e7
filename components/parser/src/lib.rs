//! Script Parser Component
//!
//! Provides the mode-switching lexer, recursive descent parser, AST, and
//! closure capture analysis for qsh scripts.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes script source in normal, string, and command modes
//! - [`Token`] - Token types including literals, keywords, punctuation
//! - [`Parser`] - Backtracking recursive descent parser producing AST
//! - [`ast`] - Abstract syntax tree node types
//! - [`capture_lambda`] / [`capture_stmt`] - Free-variable capture analysis
//!
//! # Example
//!
//! ```
//! use parser::Parser;
//!
//! let parser = Parser::new();
//! let script = parser.parse("int x = 42;").unwrap();
//! assert_eq!(script.elements.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod capture;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Exp, Script, Stmt};
pub use capture::{capture_lambda, capture_stmt, CaptureKind};
pub use lexer::{Lexed, Lexer, Token};
pub use parser::Parser;
