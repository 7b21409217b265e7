//! Integration test suite for qsh
//!
//! This crate provides integration tests that verify the parser,
//! interpreter, and CLI runtime work together across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use interpreter;
    pub use parser;
    pub use shell_cli;
}
