//! End-to-End CLI Integration Tests
//!
//! Tests the full stack through the shell_cli Runtime API, the same path
//! the qsh binary uses. The persistent context makes these the REPL's
//! semantics too.

use interpreter::CommandProvider;
use shell_cli::{CliError, Runtime};
use std::cell::RefCell;
use std::rc::Rc;

struct RecordingProvider(Rc<RefCell<Vec<String>>>);

impl CommandProvider for RecordingProvider {
    fn execute(&mut self, command: &str) -> core_types::ScriptResult<()> {
        self.0.borrow_mut().push(command.to_string());
        Ok(())
    }
}

fn recording_runtime() -> (Runtime, Rc<RefCell<Vec<String>>>) {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let runtime = Runtime::with_provider(Box::new(RecordingProvider(Rc::clone(&commands))));
    (runtime, commands)
}

/// Test: Simple command dispatch
#[test]
fn test_e2e_simple_command() {
    let (mut runtime, commands) = recording_runtime();
    runtime.execute_source("@echo hello").expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo hello"]);
}

/// Test: Arithmetic interpolated into a command
#[test]
fn test_e2e_arithmetic() {
    let (mut runtime, commands) = recording_runtime();
    runtime
        .execute_source("@echo ${(10 + 20) * 2 - 18}")
        .expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo 42"]);
}

/// Test: Variables persist across separate executions, REPL style
#[test]
fn test_e2e_variables_persist() {
    let (mut runtime, commands) = recording_runtime();
    runtime.execute_source("int total = 0;").expect("Execution failed");
    runtime
        .execute_source("total = total + 5;")
        .expect("Execution failed");
    runtime
        .execute_source("total = total + 7; @echo ${total}")
        .expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo 12"]);
}

/// Test: Functions declared in one execution are callable in the next
#[test]
fn test_e2e_functions_persist() {
    let (mut runtime, commands) = recording_runtime();
    runtime
        .execute_source("int Square(int n) { return n * n; }")
        .expect("Execution failed");
    runtime
        .execute_source("@echo ${Square(9)}")
        .expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo 81"]);
}

/// Test: Parse failures come back as ParseError, not a panic
#[test]
fn test_e2e_parse_error() {
    let (mut runtime, _) = recording_runtime();
    let error = runtime.execute_source("int x = ;").unwrap_err();
    assert!(matches!(error, CliError::ParseError(_)));
}

/// Test: Runtime failures come back as ScriptError
#[test]
fn test_e2e_script_error() {
    let (mut runtime, _) = recording_runtime();
    let error = runtime.execute_source("int x = 1 / 0;").unwrap_err();
    assert!(matches!(error, CliError::ScriptError(_)));
}

/// Test: A failed execution does not poison later ones
#[test]
fn test_e2e_recovers_after_error() {
    let (mut runtime, commands) = recording_runtime();
    runtime.execute_source("int x = 1;").expect("Execution failed");
    let _ = runtime.execute_source("@echo ${undefined_name}").unwrap_err();
    runtime.execute_source("@echo ${x}").expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo 1"]);
}

/// Test: Tasks spawned in a script drain before the script returns
#[test]
fn test_e2e_script_end_barrier() {
    let (mut runtime, commands) = recording_runtime();
    runtime
        .execute_source("task { @echo background } @echo foreground")
        .expect("Execution failed");
    assert_eq!(*commands.borrow(), vec!["echo foreground", "echo background "]);
}
