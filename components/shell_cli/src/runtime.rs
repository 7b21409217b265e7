//! Runtime orchestration for script execution
//!
//! The Runtime struct wires the parser and evaluator together and keeps
//! the evaluation context alive between runs, which is what gives the
//! REPL persistent variables and functions.

use crate::error::{CliError, CliResult};
use interpreter::{CommandProvider, EvalContext, Evaluator, ShellCommandProvider};
use parser::Parser;

/// Coordinates parsing and evaluation for the CLI.
pub struct Runtime {
    parser: Parser,
    evaluator: Evaluator,
    ctx: EvalContext,
}

impl Runtime {
    /// Create a runtime that executes commands through the system shell.
    pub fn new() -> Self {
        Self::with_provider(Box::new(ShellCommandProvider::new()))
    }

    /// Create a runtime with a custom command provider.
    pub fn with_provider(provider: Box<dyn CommandProvider>) -> Self {
        Runtime {
            parser: Parser::new(),
            evaluator: Evaluator::new(provider),
            ctx: EvalContext::new(),
        }
    }

    /// Read and execute a script file.
    pub fn execute_file(&mut self, path: &str) -> CliResult<()> {
        let source = std::fs::read_to_string(path)?;
        self.execute_source(&source)
    }

    /// Execute script source against the persistent context.
    pub fn execute_source(&mut self, source: &str) -> CliResult<()> {
        let script = self
            .parser
            .parse(source)
            .map_err(|error| CliError::ParseError(error.to_string()))?;

        self.evaluator.eval_script_in(&script, &mut self.ctx)?;
        Ok(())
    }

    /// Run the interactive REPL on this runtime.
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}
