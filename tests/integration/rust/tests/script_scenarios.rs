//! Whole-script scenarios
//!
//! Larger scripts that combine functions, closures, loops, and tasks the
//! way real shell scripts would.

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

fn run(source: &str) -> Vec<String> {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let mut evaluator = Evaluator::new(Box::new(RecordingProvider(Rc::clone(&commands))));

    let parser = Parser::new();
    let script = parser.parse(source).expect("script should parse");
    evaluator.eval_script(&script).expect("script should run");

    let result = commands.borrow().clone();
    result
}

/// Recursive factorial through a declared function
#[test]
fn test_scenario_factorial() {
    let commands = run(
        "int Fact(int n) {\n\
         \x20   if (n <= 1) return 1;\n\
         \x20   return n * Fact(n - 1);\n\
         }\n\
         @echo ${Fact(6)}",
    );
    assert_eq!(commands, vec!["echo 720"]);
}

/// Iterative fibonacci with multi-declarator locals
#[test]
fn test_scenario_fibonacci() {
    let commands = run(
        "int Fib(int n) {\n\
         \x20   int a = 0, b = 1;\n\
         \x20   for (int i = 0; i < n; i++) {\n\
         \x20       int next = a + b;\n\
         \x20       a = b;\n\
         \x20       b = next;\n\
         \x20   }\n\
         \x20   return a;\n\
         }\n\
         @echo ${Fib(10)}",
    );
    assert_eq!(commands, vec!["echo 55"]);
}

/// A counter closure keeps its own mutable state across calls
#[test]
fn test_scenario_counter_closure() {
    let commands = run(
        "int count = 0;\n\
         lambda next = () => {\n\
         \x20   count = count + 1;\n\
         \x20   return count;\n\
         };\n\
         @echo ${next()} ${next()} ${next()}",
    );
    assert_eq!(commands, vec!["echo 1 2 3"]);
}

/// Break and continue steer a filtering loop
#[test]
fn test_scenario_filter_loop() {
    let commands = run(
        "for (int i = 0; i < 10; i++) {\n\
         \x20   if (i % 2 == 0) continue;\n\
         \x20   if (i > 6) break;\n\
         \x20   @echo odd ${i}\n\
         }\n",
    );
    assert_eq!(commands, vec!["echo odd 1", "echo odd 3", "echo odd 5"]);
}

/// Each spawned task snapshots the loop variable by copy
#[test]
fn test_scenario_task_per_iteration() {
    let commands = run(
        "for (int i = 0; i < 3; i++) {\n\
         \x20   task { @echo worker ${i} }\n\
         }\n\
         await { @echo waiting }\n\
         @echo done",
    );
    assert_eq!(
        commands,
        vec![
            "echo waiting ",
            "echo worker 0 ",
            "echo worker 1 ",
            "echo worker 2 ",
            "echo done"
        ]
    );
}

/// Functions calling functions, with string concatenation
#[test]
fn test_scenario_function_composition() {
    let commands = run(
        "string Decorate(string s) { return \"[\" + s + \"]\"; }\n\
         string Shout(string s) { return Decorate(s + \"!\"); }\n\
         @echo ${Shout(\"hi\")}",
    );
    assert_eq!(commands, vec!["echo [hi!]"]);
}

/// Block scoping shadows and restores across nesting levels
#[test]
fn test_scenario_nested_shadowing() {
    let commands = run(
        "string level = \"outer\";\n\
         {\n\
         \x20   string level = \"middle\";\n\
         \x20   {\n\
         \x20       string level = \"inner\";\n\
         \x20       @echo ${level}\n\
         \x20   }\n\
         \x20   @echo ${level}\n\
         }\n\
         @echo ${level}",
    );
    assert_eq!(commands, vec!["echo inner", "echo middle", "echo outer"]);
}

/// String interpolation nests expressions inside string literals
#[test]
fn test_scenario_nested_interpolation() {
    let commands = run(
        "string name = \"world\";\n\
         string msg = \"hello ${name + \"!\"}\";\n\
         @echo ${msg}",
    );
    assert_eq!(commands, vec!["echo hello world!"]);
}

/// A lambda passed into a function drives its behavior
#[test]
fn test_scenario_higher_order_function() {
    let commands = run(
        "int Apply(lambda f, int n) { return f(n); }\n\
         @echo ${Apply(x => x * x, 7)}",
    );
    assert_eq!(commands, vec!["echo 49"]);
}
