//! Core types shared across the qsh language components.
//!
//! This crate provides the foundational types for the scripting runtime:
//! source text access, cursor positions, and the error model.
//!
//! # Overview
//!
//! - [`SourceBuffer`] - Immutable script source text
//! - [`SourcePos`] - Cheap-to-clone cursor into a source buffer
//! - [`ScriptError`] - Errors raised by lexing, parsing, and evaluation
//! - [`ErrorKind`] - Categories of script errors
//!
//! # Examples
//!
//! ```
//! use core_types::SourceBuffer;
//!
//! let buffer = SourceBuffer::new("int x = 0;");
//! let pos = buffer.first_pos();
//! assert_eq!(pos.ch(), Some('i'));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, ScriptError, ScriptResult};
pub use source::{SourceBuffer, SourcePos};
