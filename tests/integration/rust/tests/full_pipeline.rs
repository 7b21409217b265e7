//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Parser -> AST -> Evaluator -> Commands.
//! Every test asserts on the exact command strings the script dispatched.

use core_types::{ErrorKind, ScriptError};
use interpreter::{CommandProvider, Evaluator};
use parser::Parser;
use std::cell::RefCell;
use std::rc::Rc;

struct RecordingProvider(Rc<RefCell<Vec<String>>>);

impl CommandProvider for RecordingProvider {
    fn execute(&mut self, command: &str) -> core_types::ScriptResult<()> {
        self.0.borrow_mut().push(command.to_string());
        Ok(())
    }
}

/// Helper function to execute script source and collect dispatched commands
fn execute_script(source: &str) -> Result<Vec<String>, ScriptError> {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let mut evaluator = Evaluator::new(Box::new(RecordingProvider(Rc::clone(&commands))));

    let parser = Parser::new();
    let script = parser.parse(source)?;
    evaluator.eval_script(&script)?;

    let result = commands.borrow().clone();
    Ok(result)
}

/// Test: Arithmetic with precedence and parentheses
#[test]
fn test_pipeline_arithmetic() {
    let commands = execute_script("int x = (10 + 20) * 2 - 18; @echo ${x}").expect("Execution failed");
    assert_eq!(commands, vec!["echo 42"]);
}

/// Test: Variable declaration, assignment, and interpolation
#[test]
fn test_pipeline_variables() {
    let commands =
        execute_script("string greeting = \"hello\"; greeting = greeting + \" world\"; @echo ${greeting}")
            .expect("Execution failed");
    assert_eq!(commands, vec!["echo hello world"]);
}

/// Test: If statement takes the correct branch
#[test]
fn test_pipeline_if_else() {
    let commands = execute_script("int n = 3; if (n < 5) @echo small\nelse @echo big")
        .expect("Execution failed");
    assert_eq!(commands, vec!["echo small"]);
}

/// Test: For loop with init, condition, and continuation
#[test]
fn test_pipeline_for_loop() {
    let commands =
        execute_script("for (int i = 0; i < 3; i++) @echo iteration ${i}\n").expect("Execution failed");
    assert_eq!(
        commands,
        vec!["echo iteration 0", "echo iteration 1", "echo iteration 2"]
    );
}

/// Test: Function declaration, call, and return value
#[test]
fn test_pipeline_function_call() {
    let commands = execute_script(
        "int Double(int n) { return n * 2; }\n\
         @echo ${Double(21)}",
    )
    .expect("Execution failed");
    assert_eq!(commands, vec!["echo 42"]);
}

/// Test: Lambda with a reference capture mutates the outer variable
#[test]
fn test_pipeline_lambda_ref_capture() {
    let commands = execute_script(
        "int count = 0;\n\
         lambda bump = () => { count = count + 1; };\n\
         bump();\n\
         bump();\n\
         @echo ${count}",
    )
    .expect("Execution failed");
    assert_eq!(commands, vec!["echo 2"]);
}

/// Test: Command block statement runs each line as its own command
#[test]
fn test_pipeline_command_block() {
    let commands = execute_script("int x = 7;\n@{\necho first ${x}\necho second\n}\n")
        .expect("Execution failed");
    assert_eq!(commands, vec!["echo first 7", "echo second"]);
}

/// Test: Tasks defer until the await barrier
#[test]
fn test_pipeline_task_await() {
    let commands = execute_script("task { @echo deferred } await { @echo body } @echo done")
        .expect("Execution failed");
    assert_eq!(commands, vec!["echo body ", "echo deferred ", "echo done"]);
}

/// Test: String comparison drives control flow
#[test]
fn test_pipeline_string_comparison() {
    let commands = execute_script("if (\"apple\" < \"banana\") @echo ordered\n").expect("Execution failed");
    assert_eq!(commands, vec!["echo ordered"]);
}

/// Test: Parse errors surface as syntax errors
#[test]
fn test_pipeline_syntax_error() {
    let error = execute_script("for (int i = 0;").unwrap_err();
    assert_eq!(error.kind, ErrorKind::SyntaxError);
}

/// Test: Division by zero surfaces as a runtime error
#[test]
fn test_pipeline_divide_by_zero() {
    let error = execute_script("int x = 1 / 0;").unwrap_err();
    assert_eq!(error.kind, ErrorKind::DivideByZero);
}

/// Test: Unbound names surface as name errors
#[test]
fn test_pipeline_name_error() {
    let error = execute_script("@echo ${missing}").unwrap_err();
    assert_eq!(error.kind, ErrorKind::NameError);
}

/// Test: Arithmetic on a bool surfaces as a type error
#[test]
fn test_pipeline_type_error() {
    let error = execute_script("int x = true + 1;").unwrap_err();
    assert_eq!(error.kind, ErrorKind::TypeError);
}
