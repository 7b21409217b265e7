//! Deferred task queueing and await barriers.
//!
//! Command texts keep the spacing the lexer saw: an inline command
//! terminated by `}` keeps its trailing space, one terminated by end of
//! input or newline does not.

use std::cell::RefCell;
use std::rc::Rc;

use core_types::ScriptResult;
use interpreter::{CommandProvider, Evaluator};
use parser::Parser;

struct RecordingProvider(Rc<RefCell<Vec<String>>>);

impl CommandProvider for RecordingProvider {
    fn execute(&mut self, command: &str) -> ScriptResult<()> {
        self.0.borrow_mut().push(command.to_string());
        Ok(())
    }
}

fn run_ok(source: &str) -> Vec<String> {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let mut evaluator = Evaluator::new(Box::new(RecordingProvider(Rc::clone(&commands))));
    let script = Parser::new().parse(source).expect("script parses");
    evaluator.eval_script(&script).expect("script evaluates");
    let commands = commands.borrow().clone();
    commands
}

#[test]
fn test_task_is_deferred_until_await() {
    // the await body runs first, then the barrier runs the queued task,
    // and only then does the following statement run
    assert_eq!(
        run_ok("task { @echo t } await { @echo b } @echo c"),
        vec!["echo b ", "echo t ", "echo c"]
    );
}

#[test]
fn test_tasks_run_in_spawn_order() {
    assert_eq!(
        run_ok("task { @echo one } task { @echo two } await {}"),
        vec!["echo one ", "echo two "]
    );
}

#[test]
fn test_task_spawned_by_task_runs_at_same_barrier() {
    assert_eq!(
        run_ok("task { task { @echo inner } @echo outer } await {} @echo after"),
        vec!["echo outer ", "echo inner ", "echo after"]
    );
}

#[test]
fn test_script_end_runs_leftover_tasks() {
    assert_eq!(
        run_ok("task { @echo late } @echo main"),
        vec!["echo main", "echo late "]
    );
}

#[test]
fn test_call_frame_runs_its_own_tasks() {
    // tasks spawned inside a call run before the call returns
    assert_eq!(
        run_ok("void f() { task { @echo inside } } f(); @echo after"),
        vec!["echo inside ", "echo after"]
    );
}

#[test]
fn test_task_copy_capture_snapshots_at_spawn() {
    assert_eq!(
        run_ok("int n = 5; task { @echo ${n} } n = 9; await {}"),
        vec!["echo 5 "]
    );
}

#[test]
fn test_task_ref_capture_shares_cell() {
    assert_eq!(
        run_ok("int n = 0; task { n = n + 1; } await {} @echo ${n}"),
        vec!["echo 1"]
    );
}

#[test]
fn test_failing_task_does_not_abort_spawner() {
    assert_eq!(
        run_ok("task { int x = 1 / 0; } await {} @echo survived"),
        vec!["echo survived"]
    );
}

#[test]
fn test_async_stmt_spawns_like_task() {
    assert_eq!(
        run_ok("async { @echo bg } await {} @echo fg"),
        vec!["echo bg ", "echo fg"]
    );
}
