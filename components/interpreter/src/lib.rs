//! Tree-walking evaluator for qsh scripts
//!
//! This crate runs parsed scripts against a mutable value-cell model:
//! - Values are identity-bearing cells in an arena owned by the evaluator
//! - Scopes and call frames are explicit snapshots of the variable map
//! - break/continue/return travel as an explicit flow-control signal
//! - `task`/`await` queue deferred bodies and drain them at barriers
//! - Command statements hand interpolated lines to a [`CommandProvider`]
//!
//! # Example
//!
//! ```
//! use interpreter::{CommandProvider, Evaluator};
//! use core_types::ScriptResult;
//! use parser::Parser;
//!
//! struct Silent;
//! impl CommandProvider for Silent {
//!     fn execute(&mut self, _command: &str) -> ScriptResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! let script = Parser::new().parse("int x = 40 + 2;").unwrap();
//! let mut evaluator = Evaluator::new(Box::new(Silent));
//! evaluator.eval_script(&script).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod context;
pub mod evaluator;
pub mod tasks;
pub mod value;

pub use command::{CommandProvider, ShellCommandProvider};
pub use context::{EvalContext, FlowControl};
pub use evaluator::Evaluator;
pub use tasks::ScriptTask;
pub use value::{Callable, Value, ValueArena, ValueRef};
